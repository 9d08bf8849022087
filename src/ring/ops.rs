//! Shared Surface - Trait Operasi, Error, dan Size Predicate
//!
//! `RingOps` mengekspresikan seluruh keluarga operasi dalam bentuk
//! by-value, supaya satu test suite bisa menjalankan kedua bentuk buffer
//! lewat interface yang sama dan membandingkan hasilnya langkah demi
//! langkah.

use core::mem;

/// Rejection dari jalur `try_*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Write ditolak - tidak ada slot kosong tersisa.
    Full,
    /// Read ditolak - tidak ada elemen baru tersisa.
    Empty,
}

/// Apakah `T` muat dalam satu machine word?
///
/// Tipe yang muat disarankan memakai bentuk by-value ([`RingBuffer`]);
/// tipe yang lebih besar memakai bentuk by-ref ([`RingBufferRef`]) supaya
/// transfer tidak meng-copy struct besar lewat ABI. Ini saran, bukan
/// aturan: semantik kedua bentuk identik, caller bebas memilih.
///
/// [`RingBuffer`]: crate::RingBuffer
/// [`RingBufferRef`]: crate::RingBufferRef
#[inline(always)]
pub const fn fits_in_word<T>() -> bool {
    mem::size_of::<T>() <= mem::size_of::<usize>()
}

/// Keluarga operasi ring buffer, dalam bentuk by-value.
///
/// Diimplementasikan oleh kedua bentuk buffer. Bentuk by-ref meng-copy
/// nilai masuk/keluar di balik interface ini; transisi index dan flag
/// dijamin identik karena kedua bentuk memakai cursor engine yang sama.
pub trait RingOps<T: Copy> {
    /// Unprotected write: timpa slot di cursor tulis tanpa cek, lalu maju.
    /// Returns index tulis berikutnya.
    fn write(&mut self, data: T) -> usize;

    /// Unprotected read: ambil elemen di cursor baca tanpa cek, lalu maju.
    /// Bisa mengembalikan data stale kalau tidak ada data baru.
    fn read(&mut self) -> T;

    /// Protected write: tolak saat FULL dan kembalikan sentinel index.
    fn p_write(&mut self, data: T) -> usize;

    /// Protected read: saat EMPTY, kembalikan lagi nilai stale tanpa maju.
    fn p_read(&mut self) -> T;

    /// Wrapper typed di atas [`p_write`](Self::p_write):
    /// `Err(Error::Full)` alih-alih sentinel index.
    fn try_write(&mut self, data: T) -> Result<usize, Error>;

    /// Wrapper typed di atas [`p_read`](Self::p_read):
    /// `Err(Error::Empty)` alih-alih nilai stale.
    fn try_read(&mut self) -> Result<T, Error>;

    /// Cek flag FULL per operasi protected terakhir.
    fn is_full(&self) -> bool;

    /// Cek flag EMPTY per operasi protected terakhir.
    fn is_empty(&self) -> bool;

    /// Jumlah slot dalam backing storage.
    fn capacity(&self) -> usize;
}
