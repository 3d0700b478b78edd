//! Property-based tests for the utilities and the attachment protocol
//!
//! These tests use proptest to verify that:
//! 1. Widening then narrowing reproduces the original bytes
//! 2. Ragged buffers are always rejected
//! 3. Address containment matches `address <= ea < address + size`
//! 4. Region EA insertion is idempotent

use binskel::ir::{IrGraph, Region};
use binskel::utilities::{
    byte_array_8_to_16, byte_array_8_to_32, byte_array_8_to_64, contains_ea, narrow,
    AddressRange, SwapEndian,
};
use binskel::{Ea, Error};
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Byte buffers whose length is a multiple of `width`
fn aligned_bytes(width: usize) -> impl Strategy<Value = Vec<u8>> {
    (0..32usize).prop_flat_map(move |words| prop::collection::vec(any::<u8>(), words * width))
}

/// Byte buffers whose length is not a multiple of `width`
fn ragged_bytes(width: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256).prop_filter("length must be ragged", move |b| {
        b.len() % width != 0
    })
}

#[derive(Debug)]
struct Span {
    address: u64,
    size: u64,
}

impl AddressRange for Span {
    fn address(&self) -> Ea {
        Ea::new(self.address)
    }
    fn size(&self) -> u64 {
        self.size
    }
}

/// Subjects that do not wrap the address space
fn well_formed_span() -> impl Strategy<Value = Span> {
    (1..u64::MAX / 2, 0..u64::MAX / 2).prop_map(|(address, size)| Span { address, size })
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn widen_16_round_trips(bytes in aligned_bytes(2), swap in any::<bool>()) {
        let words = byte_array_8_to_16(&bytes, swap).unwrap();
        prop_assert_eq!(words.len(), bytes.len() / 2);
        prop_assert_eq!(narrow(&words, swap), bytes);
    }

    #[test]
    fn widen_32_round_trips(bytes in aligned_bytes(4), swap in any::<bool>()) {
        let words = byte_array_8_to_32(&bytes, swap).unwrap();
        prop_assert_eq!(words.len(), bytes.len() / 4);
        prop_assert_eq!(narrow(&words, swap), bytes);
    }

    #[test]
    fn widen_64_round_trips(bytes in aligned_bytes(8), swap in any::<bool>()) {
        let words = byte_array_8_to_64(&bytes, swap).unwrap();
        prop_assert_eq!(words.len(), bytes.len() / 8);
        prop_assert_eq!(narrow(&words, swap), bytes);
    }

    #[test]
    fn swap_matches_swap_endian(bytes in aligned_bytes(4)) {
        let be = byte_array_8_to_32(&bytes, false).unwrap();
        let le = byte_array_8_to_32(&bytes, true).unwrap();
        let swapped: Vec<u32> = be.into_iter().map(SwapEndian::swap_endian).collect();
        prop_assert_eq!(swapped, le);
    }

    #[test]
    fn ragged_input_is_rejected(b2 in ragged_bytes(2), b4 in ragged_bytes(4), b8 in ragged_bytes(8)) {
        prop_assert_eq!(byte_array_8_to_16(&b2, false), Err(Error::byte_width(b2.len(), 2)));
        prop_assert_eq!(byte_array_8_to_32(&b4, true), Err(Error::byte_width(b4.len(), 4)));
        prop_assert_eq!(byte_array_8_to_64(&b8, false), Err(Error::byte_width(b8.len(), 8)));
    }

    #[test]
    fn unset_subject_contains_nothing(size in any::<u64>(), ea in any::<u64>()) {
        let span = Span { address: 0, size };
        prop_assert!(!contains_ea(&span, Ea::new(ea)));
    }

    #[test]
    fn containment_matches_half_open_range(span in well_formed_span(), ea in any::<u64>()) {
        let expected = span.address <= ea && ea < span.address + span.size;
        prop_assert_eq!(contains_ea(&span, Ea::new(ea)), expected);

        let limit = Ea::new(span.address + span.size);
        prop_assert!(!contains_ea(&span, limit));
        if span.size > 0 {
            prop_assert!(contains_ea(&span, Ea::new(span.address)));
        }
    }

    #[test]
    fn add_ea_is_idempotent(eas in prop::collection::vec(any::<u64>(), 0..64)) {
        let mut region = Region::new();
        for &ea in &eas {
            region.add_ea(Ea::new(ea));
        }
        let before = region.eas();
        for &ea in &eas {
            region.add_ea(Ea::new(ea));
        }
        prop_assert_eq!(region.eas(), before);
    }

    #[test]
    fn region_never_attaches_outside_module(pick in 0usize..3) {
        let mut graph = IrGraph::new();
        let ir = graph.add_ir();
        let module = graph.add_module("m");
        graph.attach(module, ir).unwrap();
        let other = graph.add_region();
        graph.attach(other, module).unwrap();
        let data = graph.add_data(Ea::new(8), 8);

        let parent = [ir, other, data][pick];
        let region = graph.add_region();
        let is_validation_error = matches!(graph.attach(region, parent), Err(Error::ValidationError { .. }));
        prop_assert!(is_validation_error);
        prop_assert_eq!(graph.parent(region).unwrap(), None);
    }
}
