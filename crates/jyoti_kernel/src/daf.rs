//! DAF container: file record and summary-record chain.

use crate::error::KernelError;

pub(crate) const RECORD_BYTES: usize = 1024;
pub(crate) const WORD_BYTES: usize = 8;

/// Numeric byte order declared by the file record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    /// Tag stored in the file record.
    pub const fn format_tag(self) -> &'static [u8; 8] {
        match self {
            Self::Little => b"LTL-IEEE",
            Self::Big => b"BIG-IEEE",
        }
    }

    pub(crate) fn f64_at(self, bytes: &[u8], offset: usize) -> Result<f64, KernelError> {
        let raw: [u8; 8] = bytes
            .get(offset..offset + 8)
            .and_then(|s| s.try_into().ok())
            .ok_or(KernelError::Corrupt("read past end of file"))?;
        Ok(match self {
            Self::Little => f64::from_le_bytes(raw),
            Self::Big => f64::from_be_bytes(raw),
        })
    }

    pub(crate) fn i32_at(self, bytes: &[u8], offset: usize) -> Result<i32, KernelError> {
        let raw: [u8; 4] = bytes
            .get(offset..offset + 4)
            .and_then(|s| s.try_into().ok())
            .ok_or(KernelError::Corrupt("read past end of file"))?;
        Ok(match self {
            Self::Little => i32::from_le_bytes(raw),
            Self::Big => i32::from_be_bytes(raw),
        })
    }
}

/// Parsed DAF file record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DafHeader {
    /// Number of double components per summary (2 for SPK).
    pub nd: usize,
    /// Number of integer components per summary (6 for SPK).
    pub ni: usize,
    /// Record number of the first summary record.
    pub forward: usize,
    /// Record number of the last summary record.
    pub backward: usize,
    /// First free address in the file.
    pub free: usize,
    pub endian: Endian,
    pub internal_name: String,
}

impl DafHeader {
    /// Summary size in double words.
    pub fn summary_words(&self) -> usize {
        self.nd + self.ni.div_ceil(2)
    }

    pub(crate) fn parse(bytes: &[u8]) -> Result<Self, KernelError> {
        if bytes.len() < RECORD_BYTES {
            return Err(KernelError::InvalidHeader("file shorter than one record"));
        }
        if &bytes[0..7] != b"DAF/SPK" {
            return Err(KernelError::InvalidHeader("missing DAF/SPK identification word"));
        }
        let tag = &bytes[88..96];
        let endian = if tag == Endian::Little.format_tag() {
            Endian::Little
        } else if tag == Endian::Big.format_tag() {
            Endian::Big
        } else {
            return Err(KernelError::InvalidHeader("unknown binary format"));
        };
        let nd = endian.i32_at(bytes, 8)?;
        let ni = endian.i32_at(bytes, 12)?;
        let forward = endian.i32_at(bytes, 76)?;
        let backward = endian.i32_at(bytes, 80)?;
        let free = endian.i32_at(bytes, 84)?;
        if nd != 2 || ni != 6 {
            return Err(KernelError::InvalidHeader("SPK summaries must have ND=2, NI=6"));
        }
        if forward < 2 || backward < forward || free < 1 {
            return Err(KernelError::InvalidHeader("bad record pointers"));
        }
        let internal_name = String::from_utf8_lossy(&bytes[16..76]).trim_end().to_string();
        Ok(Self {
            nd: nd as usize,
            ni: ni as usize,
            forward: forward as usize,
            backward: backward as usize,
            free: free as usize,
            endian,
            internal_name,
        })
    }
}

/// One raw summary: double components followed by integer components.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawSummary {
    pub doubles: Vec<f64>,
    pub ints: Vec<i32>,
}

/// Walk the summary-record linked list starting at `header.forward`.
pub(crate) fn read_summaries(
    bytes: &[u8],
    header: &DafHeader,
) -> Result<Vec<RawSummary>, KernelError> {
    let e = header.endian;
    let ss = header.summary_words();
    let mut out = Vec::new();
    let mut record = header.forward;
    // Guard against cyclic pointers in a damaged file.
    let max_records = bytes.len() / RECORD_BYTES + 1;
    let mut visited = 0usize;

    while record != 0 {
        visited += 1;
        if visited > max_records {
            return Err(KernelError::Corrupt("summary record chain does not terminate"));
        }
        let base = (record - 1) * RECORD_BYTES;
        let next = e.f64_at(bytes, base)?;
        let nsum = e.f64_at(bytes, base + 2 * WORD_BYTES)?;
        if !(0.0..=125.0).contains(&nsum) {
            return Err(KernelError::Corrupt("summary count out of range"));
        }
        for i in 0..nsum as usize {
            let start = base + (3 + i * ss) * WORD_BYTES;
            let mut doubles = Vec::with_capacity(header.nd);
            for k in 0..header.nd {
                doubles.push(e.f64_at(bytes, start + k * WORD_BYTES)?);
            }
            let int_base = start + header.nd * WORD_BYTES;
            let mut ints = Vec::with_capacity(header.ni);
            for k in 0..header.ni {
                ints.push(e.i32_at(bytes, int_base + k * 4)?);
            }
            out.push(RawSummary { doubles, ints });
        }
        if next < 0.0 {
            return Err(KernelError::Corrupt("negative summary record pointer"));
        }
        record = next as usize;
    }
    Ok(out)
}
