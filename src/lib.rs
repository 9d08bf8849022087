//! Toroid - Fixed-Capacity Ring Buffer di Atas Storage Milik Caller
//!
//! Arsitektur:
//! - No-Std: target microcontroller; tanpa heap, tanpa std
//! - Borrowed Storage: caller menyediakan array (statis, stack, atau
//!   region ter-mmap); buffer hanya meminjam lewat `&mut [T]`
//! - Dual Form: [`RingBuffer`] transfer by-value untuk tipe kecil,
//!   [`RingBufferRef`] transfer by-ref untuk payload besar; pilih dengan
//!   [`fits_in_word`]
//! - Dua Keluarga Operasi: `write`/`read` menimpa tanpa cek (jalur ISR
//!   yang tidak boleh gagal), `p_write`/`p_read` menolak lewat occupancy
//!   tracking FULL/EMPTY
//!
//! ```
//! use toroid::RingBuffer;
//!
//! let mut storage = [0u16; 8];
//! let mut rb = RingBuffer::new(&mut storage);
//!
//! rb.p_write(1200);
//! rb.p_write(1250);
//! assert_eq!(rb.p_read(), 1200);
//! ```

#![no_std]

mod ring;

pub use ring::{fits_in_word, Error, RingBuffer, RingBufferRef, RingOps};
