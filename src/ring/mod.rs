//! Ring Buffer Core - Borrowed Storage, Dual Transfer Form
//!
//! Prinsip desain:
//! - Borrowed Storage: backing array milik caller; komponen tidak pernah
//!   alokasi dan tidak pernah free
//! - Dual Form: by-value untuk tipe sampai satu word, by-ref untuk tipe
//!   besar, dengan semantik occupancy identik lewat satu cursor engine
//! - Sentinel Signaling: rejection dilaporkan lewat index clamped atau
//!   nilai stale, tanpa panic dan tanpa alokasi di hot path

mod by_ref;
mod by_value;
mod cursor;
mod ops;

pub use by_ref::RingBufferRef;
pub use by_value::RingBuffer;
pub use ops::{fits_in_word, Error, RingOps};
