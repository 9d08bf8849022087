//! Cursor Engine - Index Arithmetic dan Occupancy Tracking
//!
//! Semua pergerakan cursor dan transisi flag FULL/EMPTY terpusat di sini,
//! terpisah dari storage. Kedua bentuk buffer memakai engine yang sama,
//! jadi semantik occupancy tidak bisa menyimpang antar bentuk.

/// Status occupancy - dua flag terpisah, bukan satu counter.
///
/// Keduanya mulai clear: buffer baru belum FULL dan belum EMPTY menurut
/// tracking, karena belum ada operasi protected yang mengamatinya.
#[derive(Debug, Clone, Copy)]
struct Occupancy {
    full: bool,
    empty: bool,
}

/// Cursor engine untuk satu ring buffer.
///
/// Invariant: `read < capacity` dan `write < capacity` setelah setiap
/// operasi. Flag hanya berubah lewat jalur protected (`claim_*`);
/// jalur unprotected (`advance_*`) tidak pernah menyentuh flag.
#[derive(Debug)]
pub(crate) struct Cursor {
    read: usize,
    write: usize,
    capacity: usize,
    occupancy: Occupancy,
}

impl Cursor {
    /// Membuat cursor untuk ring dengan `capacity` slot.
    /// Konstruktor buffer menjamin `capacity > 0`.
    pub(crate) const fn new(capacity: usize) -> Self {
        Self {
            read: 0,
            write: 0,
            capacity,
            occupancy: Occupancy {
                full: false,
                empty: false,
            },
        }
    }

    /// Index tulis saat ini (slot yang dipakai write berikutnya).
    #[inline(always)]
    pub(crate) fn write_index(&self) -> usize {
        self.write
    }

    /// Kapasitas ring.
    #[inline(always)]
    pub(crate) const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cek flag FULL per operasi protected terakhir.
    #[inline(always)]
    pub(crate) fn is_full(&self) -> bool {
        self.occupancy.full
    }

    /// Cek flag EMPTY per operasi protected terakhir.
    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.occupancy.empty
    }

    /// Klaim slot tulis tanpa cek occupancy, lalu maju modulo capacity.
    ///
    /// Returns slot yang diklaim. Flag tidak disentuh.
    #[inline(always)]
    pub(crate) fn advance_write(&mut self) -> usize {
        let slot = self.write;
        self.write = (self.write + 1) % self.capacity;
        slot
    }

    /// Klaim slot baca tanpa cek occupancy, lalu maju modulo capacity.
    ///
    /// Returns slot yang diklaim. Flag tidak disentuh.
    #[inline(always)]
    pub(crate) fn advance_read(&mut self) -> usize {
        let slot = self.read;
        self.read = (self.read + 1) % self.capacity;
        slot
    }

    /// Jalur protected untuk write.
    ///
    /// `Ok(slot)`: ada ruang. Slot aman ditulis, EMPTY di-clear, dan FULL
    /// di-set saat cursor tulis menyusul cursor baca.
    ///
    /// `Err(sentinel)`: ditolak karena FULL, tidak ada state yang berubah.
    /// Sentinel adalah index tulis sebelumnya; kalau subtraction wrap
    /// (cursor di 0), di-clamp ke `capacity` sebagai penanda rejection
    /// yang tidak mungkin jadi index valid.
    #[inline(always)]
    pub(crate) fn claim_write(&mut self) -> Result<usize, usize> {
        if self.occupancy.full {
            return Err(self.write.wrapping_sub(1).min(self.capacity));
        }

        let slot = self.advance_write();
        self.occupancy.empty = false;
        if self.write == self.read {
            self.occupancy.full = true;
        }
        Ok(slot)
    }

    /// Jalur protected untuk read.
    ///
    /// `Ok(slot)`: ada data. FULL di-clear, dan EMPTY di-set saat cursor
    /// baca menyusul cursor tulis.
    ///
    /// `Err(slot)`: ditolak karena EMPTY, tidak ada state yang berubah.
    /// Slot adalah index baca sebelumnya (isinya stale); kalau subtraction
    /// wrap, di-clamp ke `capacity - 1` supaya selalu bisa di-index.
    #[inline(always)]
    pub(crate) fn claim_read(&mut self) -> Result<usize, usize> {
        if self.occupancy.empty {
            return Err(self.read.wrapping_sub(1).min(self.capacity - 1));
        }

        let slot = self.advance_read();
        self.occupancy.full = false;
        if self.read == self.write {
            self.occupancy.empty = true;
        }
        Ok(slot)
    }
}
