//! Mmap Region Demo - Ring Buffer di Atas Storage Eksternal
//!
//! Buffer tidak peduli array-nya datang dari mana: demo ini memetakan
//! file ke memory (memmap2), meminjamkan region itu sebagai backing
//! storage, dan menjalankan keluarga operasi protected di atasnya.
//! Isi slot ikut umur file, bukan umur buffer - persistensi murni
//! urusan caller.
//!
//! Usage:
//!   cargo run --release --example mmap_region

use std::fs::OpenOptions;
use std::io;

use memmap2::MmapOptions;
use toroid::RingBufferRef;

/// Frame telemetri 32 byte - payload khas jalur by-ref.
#[repr(C)]
#[derive(Clone, Copy)]
struct Frame {
    seq: u64,
    temp_mc: i32, // milli-celsius
    vbat_mv: u32, // millivolt
    flags: u32,
    _reserved: [u8; 12],
}

const SLOTS: usize = 64;
const REGION_SIZE: usize = SLOTS * std::mem::size_of::<Frame>();
const PATH: &str = "toroid_region.dat";

fn frame(seq: u64) -> Frame {
    Frame {
        seq,
        temp_mc: 21_500 + (seq as i32 % 7) * 250,
        vbat_mv: 3_300 - (seq as u32 % 5) * 10,
        flags: u32::from(seq % 4 == 0),
        _reserved: [0; 12],
    }
}

fn main() -> io::Result<()> {
    println!("🗺️  TOROID MMAP REGION DEMO");
    println!("===========================\n");

    // Phase 1: region ter-mmap jadi backing storage ring buffer
    {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(PATH)?;
        file.set_len(REGION_SIZE as u64)?;

        // SAFETY: File sudah dibuka dengan read/write permission
        let mut mmap = unsafe { MmapOptions::new().len(REGION_SIZE).map_mut(&file)? };

        // SAFETY: Frame hanya berisi integer, jadi semua bit pattern
        // valid; region page-aligned dan kelipatan ukuran Frame, jadi
        // prefix/suffix kosong
        let (prefix, slots, suffix) = unsafe { mmap.align_to_mut::<Frame>() };
        assert!(prefix.is_empty() && suffix.is_empty());

        let mut rb = RingBufferRef::new(slots);

        println!("📤 Writing 8 telemetry frames through p_write...");
        for seq in 0..8u64 {
            let f = frame(seq);
            let next = rb.p_write(&f);
            println!("   seq {} -> next write index {}", seq, next);
        }

        println!("\n📥 Draining 3 frames through p_read...");
        for _ in 0..3 {
            let f = rb.p_read();
            println!(
                "   seq {} temp {:.2}°C vbat {}mV",
                f.seq,
                f.temp_mc as f64 / 1000.0,
                f.vbat_mv
            );
        }

        mmap.flush()?;
    } // buffer dan mapping dilepas di sini; file jalan terus

    // Phase 2: map ulang region yang sama, isi slot masih di tempatnya
    {
        let file = OpenOptions::new().read(true).write(true).open(PATH)?;

        // SAFETY: File sudah dibuka dengan read/write permission
        let mut mmap = unsafe { MmapOptions::new().len(REGION_SIZE).map_mut(&file)? };

        // SAFETY: Sama dengan phase 1
        let (prefix, slots, suffix) = unsafe { mmap.align_to_mut::<Frame>() };
        assert!(prefix.is_empty() && suffix.is_empty());

        println!("\n🔁 Remapped the same file; first 8 slots still hold:");
        for slot in slots.iter().take(8) {
            println!("   seq {} flags {}", slot.seq, slot.flags);
        }

        // Buffer baru di atas region lama: cursor mulai dari nol dan
        // isi lama langsung kebaca - tidak ada inisialisasi storage
        let mut rb = RingBufferRef::new(slots);
        let first = rb.p_read();
        println!("\n   Fresh buffer p_read over old region -> seq {}", first.seq);
    }

    std::fs::remove_file(PATH).ok();
    println!("\n✅ Done - region file cleaned up");
    Ok(())
}
