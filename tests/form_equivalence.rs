//! Form Equivalence Suite - By-Value vs By-Ref
//!
//! Menjalankan script operasi identik pada kedua bentuk buffer lewat
//! trait `RingOps`, lalu membandingkan return value dan flag occupancy
//! langkah demi langkah. Dari luar, kedua bentuk harus tidak bisa
//! dibedakan - hanya bentuk transfernya yang beda.
//!
//! Usage:
//!   cargo test --test form_equivalence

use toroid::{fits_in_word, Error, RingBuffer, RingBufferRef, RingOps};

/// Satu langkah operasi dalam script.
#[derive(Debug, Clone, Copy)]
enum Step {
    Write(usize),
    Read,
    PWrite(usize),
    PRead,
    TryWrite(usize),
    TryRead,
}

/// Return value dari satu langkah.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Index(usize),
    Value(usize),
    TriedIndex(Result<usize, Error>),
    TriedValue(Result<usize, Error>),
}

/// Hasil teramati: return value plus kedua flag sesudah langkah itu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Observation {
    outcome: Outcome,
    full: bool,
    empty: bool,
}

fn obs(outcome: Outcome, full: bool, empty: bool) -> Observation {
    Observation {
        outcome,
        full,
        empty,
    }
}

/// Jalankan script dan catat observasi per langkah.
fn drive<R: RingOps<usize>>(ring: &mut R, script: &[Step]) -> Vec<Observation> {
    script
        .iter()
        .map(|step| {
            let outcome = match *step {
                Step::Write(v) => Outcome::Index(ring.write(v)),
                Step::Read => Outcome::Value(ring.read()),
                Step::PWrite(v) => Outcome::Index(ring.p_write(v)),
                Step::PRead => Outcome::Value(ring.p_read()),
                Step::TryWrite(v) => Outcome::TriedIndex(ring.try_write(v)),
                Step::TryRead => Outcome::TriedValue(ring.try_read()),
            };
            Observation {
                outcome,
                full: ring.is_full(),
                empty: ring.is_empty(),
            }
        })
        .collect()
}

/// Jalankan script pada kedua bentuk, storage awal nol untuk keduanya.
fn drive_both(capacity: usize, script: &[Step]) -> (Vec<Observation>, Vec<Observation>) {
    let mut value_store = vec![0usize; capacity];
    let mut rb = RingBuffer::new(&mut value_store);
    let by_value = drive(&mut rb, script);

    let mut ref_store = vec![0usize; capacity];
    let mut rr = RingBufferRef::new(&mut ref_store);
    let by_ref = drive(&mut rr, script);

    (by_value, by_ref)
}

/// Script campuran deterministik dari LCG sederhana.
fn lcg_script(seed: u64, len: usize) -> Vec<Step> {
    let mut hash = seed;
    let mut script = Vec::with_capacity(len);
    for _ in 0..len {
        hash = hash.wrapping_mul(6364136223846793005).wrapping_add(1);
        let value = (hash >> 33) as usize;
        script.push(match hash % 6 {
            0 => Step::Write(value),
            1 => Step::Read,
            2 => Step::PWrite(value),
            3 => Step::PRead,
            4 => Step::TryWrite(value),
            _ => Step::TryRead,
        });
    }
    script
}

#[test]
fn test_protected_scenario_capacity_two() {
    let script = [
        Step::PWrite(5),
        Step::PWrite(6),
        Step::PWrite(7), // rejected, sentinel clamps to capacity
        Step::PRead,
        Step::PRead,
        Step::PRead, // drained, last value repeats
    ];
    let (by_value, by_ref) = drive_both(2, &script);
    assert_eq!(by_value, by_ref);

    let expected = [
        obs(Outcome::Index(1), false, false),
        obs(Outcome::Index(0), true, false),
        obs(Outcome::Index(2), true, false),
        obs(Outcome::Value(5), false, false),
        obs(Outcome::Value(6), false, true),
        obs(Outcome::Value(6), false, true),
    ];
    assert_eq!(by_value, expected);
}

#[test]
fn test_unprotected_scenario_capacity_four() {
    let script = [
        Step::Write(10),
        Step::Write(20),
        Step::Write(30),
        Step::Write(40),
        Step::Write(50), // wraps onto slot 0, replaces 10
        Step::Read,
        Step::Read,
    ];
    let (by_value, by_ref) = drive_both(4, &script);
    assert_eq!(by_value, by_ref);

    // Unprotected traffic never touches the flags
    let expected = [
        obs(Outcome::Index(1), false, false),
        obs(Outcome::Index(2), false, false),
        obs(Outcome::Index(3), false, false),
        obs(Outcome::Index(0), false, false),
        obs(Outcome::Index(1), false, false),
        obs(Outcome::Value(50), false, false),
        obs(Outcome::Value(20), false, false),
    ];
    assert_eq!(by_value, expected);
}

#[test]
fn test_mixed_families_desync_is_observable() {
    // An unprotected write slips past the occupancy tracking: it moves
    // the write cursor without touching the flags, so the first protected
    // read afterwards already lands on the moved cursor and declares the
    // ring EMPTY. The unread 2 in slot 1 is never delivered.
    let script = [
        Step::PWrite(1),
        Step::PWrite(2),
        Step::Write(3), // overwrites slot 0, write cursor moves to 1
        Step::PRead,
        Step::PRead,
        Step::PRead,
    ];
    let (by_value, by_ref) = drive_both(2, &script);
    assert_eq!(by_value, by_ref);

    let expected = [
        obs(Outcome::Index(1), false, false),
        obs(Outcome::Index(0), true, false),
        obs(Outcome::Index(1), true, false),
        obs(Outcome::Value(3), false, true),
        obs(Outcome::Value(3), false, true),
        obs(Outcome::Value(3), false, true),
    ];
    assert_eq!(by_value, expected);
}

#[test]
fn test_try_family_matches_protected_flags() {
    let script = [
        Step::TryWrite(5),
        Step::TryWrite(6),
        Step::TryWrite(7),
        Step::TryRead,
        Step::TryRead,
        Step::TryRead,
    ];
    let (by_value, by_ref) = drive_both(2, &script);
    assert_eq!(by_value, by_ref);

    let expected = [
        obs(Outcome::TriedIndex(Ok(1)), false, false),
        obs(Outcome::TriedIndex(Ok(0)), true, false),
        obs(Outcome::TriedIndex(Err(Error::Full)), true, false),
        obs(Outcome::TriedValue(Ok(5)), false, false),
        obs(Outcome::TriedValue(Ok(6)), false, true),
        obs(Outcome::TriedValue(Err(Error::Empty)), false, true),
    ];
    assert_eq!(by_value, expected);
}

#[test]
fn test_rejected_write_sentinel_without_wrap() {
    // Drive the ring FULL with the write cursor away from zero: the
    // sentinel is then a plain `write - 1` and can collide with a valid
    // index. Telling them apart is what is_full() is for.
    let script = [
        Step::PWrite(1),
        Step::PRead,
        Step::PWrite(2),
        Step::PWrite(3),
        Step::PWrite(4),
        Step::PWrite(5), // rejected, sentinel = write - 1 = 0
    ];
    let (by_value, by_ref) = drive_both(3, &script);
    assert_eq!(by_value, by_ref);

    let expected = [
        obs(Outcome::Index(1), false, false),
        obs(Outcome::Value(1), false, true),
        obs(Outcome::Index(2), false, false),
        obs(Outcome::Index(0), false, false),
        obs(Outcome::Index(1), true, false),
        obs(Outcome::Index(0), true, false),
    ];
    assert_eq!(by_value, expected);
}

#[test]
fn test_stale_read_slot_without_wrap() {
    let script = [
        Step::PWrite(9),
        Step::PWrite(8),
        Step::PRead,
        Step::PRead,
        Step::PRead, // drained with read cursor at 2, stale slot is 1
    ];
    let (by_value, by_ref) = drive_both(4, &script);
    assert_eq!(by_value, by_ref);

    let expected = [
        obs(Outcome::Index(1), false, false),
        obs(Outcome::Index(2), false, false),
        obs(Outcome::Value(9), false, false),
        obs(Outcome::Value(8), false, true),
        obs(Outcome::Value(8), false, true),
    ];
    assert_eq!(by_value, expected);
}

#[test]
fn test_capacity_one_edges() {
    let script = [
        Step::PWrite(9),
        Step::PWrite(8), // rejected, sentinel clamps to capacity = 1
        Step::PRead,
        Step::PRead, // rejected, stale slot clamps to 0
        Step::Write(3),
        Step::Read,
    ];
    let (by_value, by_ref) = drive_both(1, &script);
    assert_eq!(by_value, by_ref);

    let expected = [
        obs(Outcome::Index(0), true, false),
        obs(Outcome::Index(1), true, false),
        obs(Outcome::Value(9), false, true),
        obs(Outcome::Value(9), false, true),
        obs(Outcome::Index(0), false, true),
        obs(Outcome::Value(3), false, true),
    ];
    assert_eq!(by_value, expected);
}

#[test]
fn test_fresh_buffer_protected_read_not_rejected() {
    // Both flags start clear, so the very first p_read on a buffer that
    // never saw a write still claims slot 0 and hands out whatever the
    // caller left in the storage.
    let mut value_store = [11usize, 22, 33];
    let mut rb = RingBuffer::new(&mut value_store);
    assert!(!rb.is_empty());
    assert_eq!(rb.p_read(), 11);

    let mut ref_store = [11usize, 22, 33];
    let mut rr = RingBufferRef::new(&mut ref_store);
    assert!(!rr.is_empty());
    assert_eq!(*rr.p_read(), 11);
}

#[test]
fn test_oversized_payload_goes_by_ref() {
    assert!(fits_in_word::<usize>());
    assert!(!fits_in_word::<[usize; 2]>());

    let mut storage = [[0usize; 2]; 4];
    let mut rb = RingBufferRef::new(&mut storage);

    rb.p_write(&[1, 2]);
    rb.p_write(&[3, 4]);
    assert_eq!(*rb.p_read(), [1, 2]);
    assert_eq!(*rb.p_read(), [3, 4]);
}

#[test]
fn test_long_mixed_script_equivalence() {
    for (capacity, seed) in [(1, 42), (2, 7), (3, 1234), (8, 99)] {
        let script = lcg_script(seed, 500);
        let (by_value, by_ref) = drive_both(capacity, &script);
        assert_eq!(by_value, by_ref, "forms diverged at capacity {}", capacity);
    }
}
