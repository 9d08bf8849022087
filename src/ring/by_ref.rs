//! Ring Buffer Bentuk By-Ref
//!
//! Transfer data terjadi lewat reference: `write` menerima `&T` dan
//! meng-copy isinya ke slot, `read` mengembalikan `&T` langsung ke slot
//! tanpa copy keluar. Bentuk ini untuk payload yang lebih besar dari satu
//! machine word (frame sensor, record telemetri), di mana copy by-value
//! di setiap transfer mulai terasa.
//!
//! Semantik cursor dan flag identik dengan bentuk by-value; hanya bentuk
//! transfer yang berbeda.

use super::cursor::Cursor;
use super::ops::{Error, RingOps};

/// Ring buffer by-ref di atas storage milik caller.
///
/// Reference hasil `read`/`p_read` menunjuk langsung ke slot. Masa
/// berlakunya dijaga borrow checker: selama reference hidup, tidak ada
/// operasi lain yang bisa menyentuh buffer, jadi "valid sampai slot
/// ditimpa" berlaku otomatis.
pub struct RingBufferRef<'a, T: Copy> {
    storage: &'a mut [T],
    cursor: Cursor,
}

impl<'a, T: Copy> RingBufferRef<'a, T> {
    /// Membuat ring buffer baru di atas `storage`.
    /// Kapasitas = panjang slice, tidak bisa menyimpang dari storage.
    ///
    /// # Panics
    /// Panic jika `storage` kosong - cursor wrap modulo kapasitas.
    pub fn new(storage: &'a mut [T]) -> Self {
        assert!(!storage.is_empty(), "storage must hold at least 1 element");

        let capacity = storage.len();
        Self {
            storage,
            cursor: Cursor::new(capacity),
        }
    }

    /// Unprotected write: copy `*data` ke slot di cursor tulis lalu maju,
    /// menimpa isi slot termasuk data yang belum dibaca.
    ///
    /// Returns index yang dipakai write berikutnya.
    #[inline(always)]
    pub fn write(&mut self, data: &T) -> usize {
        let slot = self.cursor.advance_write();
        self.storage[slot] = *data;
        self.cursor.write_index()
    }

    /// Unprotected read: reference ke elemen di cursor baca, cursor maju.
    ///
    /// Kalau tidak ada data baru sejak read terakhir, reference menunjuk
    /// data stale. Itu bukan error di jalur ini.
    #[inline(always)]
    pub fn read(&mut self) -> &T {
        let slot = self.cursor.advance_read();
        &self.storage[slot]
    }

    /// Protected write: seperti [`write`](Self::write), tapi menolak saat
    /// FULL supaya elemen terlama tidak tertimpa.
    ///
    /// Saat ditolak, storage dan cursor tidak tersentuh dan return-nya
    /// sentinel (index tulis sebelumnya, di-clamp ke `capacity` kalau
    /// wrap). Cek [`is_full`](Self::is_full) untuk mendeteksi rejection.
    #[inline(always)]
    pub fn p_write(&mut self, data: &T) -> usize {
        match self.cursor.claim_write() {
            Ok(slot) => {
                self.storage[slot] = *data;
                self.cursor.write_index()
            }
            Err(sentinel) => sentinel,
        }
    }

    /// Protected read: seperti [`read`](Self::read), tapi berhenti saat
    /// EMPTY dan mengembalikan lagi reference ke slot yang terakhir
    /// dibaca.
    #[inline(always)]
    pub fn p_read(&mut self) -> &T {
        match self.cursor.claim_read() {
            Ok(slot) | Err(slot) => &self.storage[slot],
        }
    }

    /// Wrapper typed: `Err(Error::Full)` alih-alih sentinel index.
    #[inline(always)]
    pub fn try_write(&mut self, data: &T) -> Result<usize, Error> {
        if self.cursor.is_full() {
            return Err(Error::Full);
        }
        Ok(self.p_write(data))
    }

    /// Wrapper typed: `Err(Error::Empty)` alih-alih reference stale.
    #[inline(always)]
    pub fn try_read(&mut self) -> Result<&T, Error> {
        if self.cursor.is_empty() {
            return Err(Error::Empty);
        }
        Ok(self.p_read())
    }

    /// Cek apakah buffer penuh, per operasi protected terakhir.
    /// Operasi unprotected tidak meng-update flag ini.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.cursor.is_full()
    }

    /// Cek apakah buffer kosong, per operasi protected terakhir.
    /// Operasi unprotected tidak meng-update flag ini.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    /// Kapasitas buffer.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.cursor.capacity()
    }
}

// Adapter by-value: nilai di-copy masuk/keluar di sini supaya test suite
// bisa menjalankan kedua bentuk lewat interface yang sama.
impl<'a, T: Copy> RingOps<T> for RingBufferRef<'a, T> {
    #[inline(always)]
    fn write(&mut self, data: T) -> usize {
        RingBufferRef::write(self, &data)
    }

    #[inline(always)]
    fn read(&mut self) -> T {
        *RingBufferRef::read(self)
    }

    #[inline(always)]
    fn p_write(&mut self, data: T) -> usize {
        RingBufferRef::p_write(self, &data)
    }

    #[inline(always)]
    fn p_read(&mut self) -> T {
        *RingBufferRef::p_read(self)
    }

    #[inline(always)]
    fn try_write(&mut self, data: T) -> Result<usize, Error> {
        RingBufferRef::try_write(self, &data)
    }

    #[inline(always)]
    fn try_read(&mut self) -> Result<T, Error> {
        RingBufferRef::try_read(self).map(|value| *value)
    }

    #[inline(always)]
    fn is_full(&self) -> bool {
        RingBufferRef::is_full(self)
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        RingBufferRef::is_empty(self)
    }

    #[inline(always)]
    fn capacity(&self) -> usize {
        RingBufferRef::capacity(self)
    }
}
