//! Ring Buffer Bentuk By-Value
//!
//! Transfer data terjadi by-value: `write` menerima `T` langsung dan
//! `read` meng-copy nilai keluar. Bentuk ini untuk tipe kecil (sampai
//! satu machine word) di mana indirection justru lebih mahal daripada
//! copy. Lihat [`fits_in_word`](crate::fits_in_word) untuk panduan.

use super::cursor::Cursor;
use super::ops::{Error, RingOps};

/// Ring buffer by-value di atas storage milik caller.
///
/// Storage dipinjam eksklusif (`&mut`) selama buffer hidup, jadi aturan
/// "jangan sentuh array dari luar selama dipakai" ditegakkan compiler,
/// bukan sekadar dokumentasi. Tidak ada alokasi sama sekali.
pub struct RingBuffer<'a, T: Copy> {
    storage: &'a mut [T],
    cursor: Cursor,
}

impl<'a, T: Copy> RingBuffer<'a, T> {
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

    /// Unprotected write: simpan `data` di cursor tulis lalu maju, menimpa
    /// isi slot termasuk data yang belum dibaca.
    ///
    /// Returns index yang dipakai write berikutnya. Selalu berhasil;
    /// mencegah overwrite adalah urusan caller (atau pakai
    /// [`p_write`](Self::p_write)).
    #[inline(always)]
    pub fn write(&mut self, data: T) -> usize {
        let slot = self.cursor.advance_write();
        self.storage[slot] = data;
        self.cursor.write_index()
    }

    /// Unprotected read: ambil elemen di cursor baca lalu maju.
    ///
    /// Kalau tidak ada data baru sejak read terakhir, nilai lama ikut
    /// terbaca lagi (stale). Itu bukan error di jalur ini.
    #[inline(always)]
    pub fn read(&mut self) -> T {
        let slot = self.cursor.advance_read();
        self.storage[slot]
    }

    /// Protected write: seperti [`write`](Self::write), tapi menolak saat
    /// FULL supaya elemen terlama tidak tertimpa.
    ///
    /// Saat ditolak, storage dan cursor tidak tersentuh dan return-nya
    /// sentinel (index tulis sebelumnya, di-clamp ke `capacity` kalau
    /// wrap). Cek [`is_full`](Self::is_full) untuk mendeteksi rejection
    /// tanpa menebak dari index.
    #[inline(always)]
    pub fn p_write(&mut self, data: T) -> usize {
        match self.cursor.claim_write() {
            Ok(slot) => {
                self.storage[slot] = data;
                self.cursor.write_index()
            }
            Err(sentinel) => sentinel,
        }
    }

    /// Protected read: seperti [`read`](Self::read), tapi berhenti saat
    /// EMPTY dan mengembalikan lagi nilai yang terakhir dikembalikan.
    ///
    /// Nilai duplikat itu penanda buffer terkuras; cek
    /// [`is_empty`](Self::is_empty) untuk membedakannya dari data asli.
    #[inline(always)]
    pub fn p_read(&mut self) -> T {
        match self.cursor.claim_read() {
            Ok(slot) | Err(slot) => self.storage[slot],
        }
    }

    /// Wrapper typed: `Err(Error::Full)` alih-alih sentinel index.
    #[inline(always)]
    pub fn try_write(&mut self, data: T) -> Result<usize, Error> {
        if self.cursor.is_full() {
            return Err(Error::Full);
        }
        Ok(self.p_write(data))
    }

    /// Wrapper typed: `Err(Error::Empty)` alih-alih nilai stale.
    #[inline(always)]
    pub fn try_read(&mut self) -> Result<T, Error> {
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

impl<'a, T: Copy> RingOps<T> for RingBuffer<'a, T> {
    #[inline(always)]
    fn write(&mut self, data: T) -> usize {
        RingBuffer::write(self, data)
    }

    #[inline(always)]
    fn read(&mut self) -> T {
        RingBuffer::read(self)
    }

    #[inline(always)]
    fn p_write(&mut self, data: T) -> usize {
        RingBuffer::p_write(self, data)
    }

    #[inline(always)]
    fn p_read(&mut self) -> T {
        RingBuffer::p_read(self)
    }

    #[inline(always)]
    fn try_write(&mut self, data: T) -> Result<usize, Error> {
        RingBuffer::try_write(self, data)
    }

    #[inline(always)]
    fn try_read(&mut self) -> Result<T, Error> {
        RingBuffer::try_read(self)
    }

    #[inline(always)]
    fn is_full(&self) -> bool {
        RingBuffer::is_full(self)
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        RingBuffer::is_empty(self)
    }

    #[inline(always)]
    fn capacity(&self) -> usize {
        RingBuffer::capacity(self)
    }
}
