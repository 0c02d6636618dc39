use std::f64::consts::TAU;

use crate::model::Segment;

/// Expand the base segment list into the actual ring of wedges by
/// concatenating it `repeat` times, preserving order.
pub fn build_ring(segments: &[Segment], repeat: u32) -> Vec<Segment> {
    let mut ring = Vec::with_capacity(segments.len() * repeat as usize);
    for _ in 0..repeat {
        ring.extend_from_slice(segments);
    }
    ring
}

/// Angular width of one wedge. Callers must guard against an empty ring;
/// a zero-length ring is the inert-wheel case and has no arc size.
pub fn arc_size(ring_len: usize) -> f64 {
    TAU / ring_len as f64
}
