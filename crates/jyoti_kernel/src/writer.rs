//! Minimal little-endian SPK Type 2 writer.
//!
//! Produces one summary record and one name record, followed by the
//! segment data. Used for fixtures and for trimming large kernels down to
//! the bodies an application needs.

use crate::daf::{Endian, RECORD_BYTES, WORD_BYTES};
use crate::error::KernelError;

/// Summaries that fit in one 128-word summary record (3 control words, 5 per summary).
const MAX_SEGMENTS: usize = 25;

/// One Type 2 segment to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct Type2Segment {
    pub target: i32,
    pub center: i32,
    /// NAIF frame code, 1 = J2000.
    pub frame: i32,
    pub init_tdb_s: f64,
    pub intlen_s: f64,
    /// Each record: `[mid, radius, x coeffs.., y coeffs.., z coeffs..]`.
    pub records: Vec<Vec<f64>>,
}

impl Type2Segment {
    fn rsize(&self) -> Result<usize, KernelError> {
        let first = self
            .records
            .first()
            .ok_or(KernelError::Corrupt("segment has no records"))?;
        let rsize = first.len();
        if rsize < 5 || (rsize - 2) % 3 != 0 {
            return Err(KernelError::Corrupt("Type 2 record size is not 2 + 3k"));
        }
        if self.records.iter().any(|r| r.len() != rsize) {
            return Err(KernelError::Corrupt("records differ in size"));
        }
        Ok(rsize)
    }
}

fn put_i32(buf: &mut [u8], offset: usize, v: i32) {
    buf[offset..offset + 4].copy_from_slice(&v.to_le_bytes());
}

fn put_f64(buf: &mut [u8], offset: usize, v: f64) {
    buf[offset..offset + 8].copy_from_slice(&v.to_le_bytes());
}

/// Serialise segments into an SPK image readable by [`crate::SpkKernel`].
pub fn write_type2_spk(internal_name: &str, segments: &[Type2Segment]) -> Result<Vec<u8>, KernelError> {
    if segments.len() > MAX_SEGMENTS {
        return Err(KernelError::Corrupt("too many segments for one summary record"));
    }

    // Records 1..=3: file record, summary record, name record.
    let mut data: Vec<f64> = Vec::new();
    let first_data_addr = 3 * RECORD_BYTES / WORD_BYTES + 1;
    let mut summaries = Vec::with_capacity(segments.len());
    for seg in segments {
        let rsize = seg.rsize()?;
        let begin = first_data_addr + data.len();
        for rec in &seg.records {
            data.extend_from_slice(rec);
        }
        let n = seg.records.len();
        data.extend_from_slice(&[seg.init_tdb_s, seg.intlen_s, rsize as f64, n as f64]);
        let end = first_data_addr + data.len() - 1;
        let start = seg.init_tdb_s;
        let stop = seg.init_tdb_s + seg.intlen_s * n as f64;
        summaries.push((start, stop, seg, begin, end));
    }

    let data_records = (data.len() * WORD_BYTES).div_ceil(RECORD_BYTES);
    let mut buf = vec![0u8; (3 + data_records) * RECORD_BYTES];

    // File record.
    buf[0..8].copy_from_slice(b"DAF/SPK ");
    put_i32(&mut buf, 8, 2);
    put_i32(&mut buf, 12, 6);
    let mut name = [b' '; 60];
    for (dst, src) in name.iter_mut().zip(internal_name.bytes()) {
        *dst = src;
    }
    buf[16..76].copy_from_slice(&name);
    put_i32(&mut buf, 76, 2);
    put_i32(&mut buf, 80, 2);
    put_i32(&mut buf, 84, (first_data_addr + data.len()) as i32);
    buf[88..96].copy_from_slice(Endian::Little.format_tag());

    // Summary record.
    let base = RECORD_BYTES;
    put_f64(&mut buf, base, 0.0);
    put_f64(&mut buf, base + 8, 0.0);
    put_f64(&mut buf, base + 16, summaries.len() as f64);
    for (i, (start, stop, seg, begin, end)) in summaries.iter().enumerate() {
        let off = base + (3 + i * 5) * WORD_BYTES;
        put_f64(&mut buf, off, *start);
        put_f64(&mut buf, off + 8, *stop);
        let ints = off + 16;
        put_i32(&mut buf, ints, seg.target);
        put_i32(&mut buf, ints + 4, seg.center);
        put_i32(&mut buf, ints + 8, seg.frame);
        put_i32(&mut buf, ints + 12, 2);
        put_i32(&mut buf, ints + 16, *begin as i32);
        put_i32(&mut buf, ints + 20, *end as i32);
    }

    // Name record stays blank.
    buf[2 * RECORD_BYTES..3 * RECORD_BYTES].fill(b' ');

    let data_base = 3 * RECORD_BYTES;
    for (i, w) in data.iter().enumerate() {
        put_f64(&mut buf, data_base + i * WORD_BYTES, *w);
    }
    Ok(buf)
}
