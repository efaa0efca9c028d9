//! SPK segments and Type 2 evaluation.

use std::path::Path;

use log::debug;

use crate::chebyshev::value_and_derivative;
use crate::daf::{DafHeader, Endian, WORD_BYTES, read_summaries};
use crate::error::KernelError;

/// Descriptor of one SPK segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SpkSegment {
    pub start_tdb_s: f64,
    pub end_tdb_s: f64,
    pub target: i32,
    pub center: i32,
    pub frame: i32,
    pub data_type: i32,
    /// First data word, 1-based.
    pub begin_addr: usize,
    /// Last data word, 1-based, inclusive.
    pub end_addr: usize,
}

impl SpkSegment {
    fn covers(&self, epoch_tdb_s: f64) -> bool {
        epoch_tdb_s >= self.start_tdb_s && epoch_tdb_s <= self.end_tdb_s
    }
}

/// Position and velocity of a target relative to its segment center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpkEvaluation {
    pub position_km: [f64; 3],
    pub velocity_km_s: [f64; 3],
}

/// Type 2 directory stored in the last four words of a segment.
#[derive(Debug, Clone, Copy)]
struct Type2Directory {
    init: f64,
    intlen: f64,
    rsize: usize,
    n: usize,
}

/// An SPK file held in memory.
pub struct SpkKernel {
    header: DafHeader,
    segments: Vec<SpkSegment>,
    data: Vec<u8>,
}

impl std::fmt::Debug for SpkKernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpkKernel")
            .field("internal_name", &self.header.internal_name)
            .field("segments", &self.segments.len())
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl SpkKernel {
    /// Read and index an SPK file.
    pub fn load(path: &Path) -> Result<Self, KernelError> {
        let data = std::fs::read(path)?;
        let kernel = Self::from_bytes(data)?;
        debug!(
            "loaded SPK {} with {} segments",
            path.display(),
            kernel.segments.len()
        );
        Ok(kernel)
    }

    /// Index an SPK image already in memory.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, KernelError> {
        let header = DafHeader::parse(&data)?;
        let segments = read_summaries(&data, &header)?
            .into_iter()
            .map(|raw| {
                let addr = |v: i32| {
                    usize::try_from(v).map_err(|_| KernelError::Corrupt("negative segment address"))
                };
                Ok(SpkSegment {
                    start_tdb_s: raw.doubles[0],
                    end_tdb_s: raw.doubles[1],
                    target: raw.ints[0],
                    center: raw.ints[1],
                    frame: raw.ints[2],
                    data_type: raw.ints[3],
                    begin_addr: addr(raw.ints[4])?,
                    end_addr: addr(raw.ints[5])?,
                })
            })
            .collect::<Result<Vec<_>, KernelError>>()?;
        let kernel = Self {
            header,
            segments,
            data,
        };
        for seg in kernel.segments.iter().filter(|s| s.data_type == 2) {
            kernel.directory(seg)?;
        }
        Ok(kernel)
    }

    pub fn header(&self) -> &DafHeader {
        &self.header
    }

    pub fn segments(&self) -> &[SpkSegment] {
        &self.segments
    }

    /// Center of the first segment whose target is `target`.
    pub fn center_for(&self, target: i32) -> Option<i32> {
        self.segments
            .iter()
            .find(|s| s.target == target)
            .map(|s| s.center)
    }

    /// Evaluate `target` relative to `center` at `epoch_tdb_s`.
    ///
    /// When several segments cover the epoch the last one in the file wins,
    /// as NAIF readers do.
    pub fn evaluate(
        &self,
        target: i32,
        center: i32,
        epoch_tdb_s: f64,
    ) -> Result<SpkEvaluation, KernelError> {
        let mut any_pair = false;
        let seg = self
            .segments
            .iter()
            .rev()
            .filter(|s| s.target == target && s.center == center)
            .inspect(|_| any_pair = true)
            .find(|s| s.covers(epoch_tdb_s));
        match seg {
            Some(seg) => self.evaluate_segment(seg, epoch_tdb_s),
            None if any_pair => Err(KernelError::EpochOutOfRange {
                target,
                center,
                epoch_tdb_s,
            }),
            None => Err(KernelError::SegmentNotFound { target, center }),
        }
    }

    /// Sum the segment chain from `body` down to the solar-system barycenter.
    ///
    /// Planet codes without their own segment (`x99`) fall back to their
    /// barycenter (`x`). Returns `[x, y, z, vx, vy, vz]` in km and km/s.
    pub fn resolve_to_ssb(&self, body: i32, epoch_tdb_s: f64) -> Result<[f64; 6], KernelError> {
        let mut code = body;
        let mut state = [0.0_f64; 6];
        let mut hops = 0;
        while code != 0 {
            hops += 1;
            if hops > 16 {
                return Err(KernelError::Corrupt("segment chain does not reach the barycenter"));
            }
            let Some(center) = self.center_for(code) else {
                let bary = planet_body_to_barycenter(code);
                if bary != code {
                    code = bary;
                    continue;
                }
                return Err(KernelError::SegmentNotFound {
                    target: code,
                    center: -1,
                });
            };
            let eval = self.evaluate(code, center, epoch_tdb_s)?;
            for i in 0..3 {
                state[i] += eval.position_km[i];
                state[i + 3] += eval.velocity_km_s[i];
            }
            code = center;
        }
        Ok(state)
    }

    fn word(&self, addr: usize) -> Result<f64, KernelError> {
        if addr == 0 {
            return Err(KernelError::Corrupt("address 0 is not a valid word"));
        }
        self.header
            .endian
            .f64_at(&self.data, (addr - 1) * WORD_BYTES)
    }

    fn directory(&self, seg: &SpkSegment) -> Result<Type2Directory, KernelError> {
        if seg.end_addr < seg.begin_addr + 3 {
            return Err(KernelError::Corrupt("segment too short for a Type 2 directory"));
        }
        let init = self.word(seg.end_addr - 3)?;
        let intlen = self.word(seg.end_addr - 2)?;
        let rsize = whole_count(self.word(seg.end_addr - 1)?)?;
        let n = whole_count(self.word(seg.end_addr)?)?;
        if !init.is_finite() || !intlen.is_finite() || intlen <= 0.0 {
            return Err(KernelError::Corrupt("bad Type 2 directory"));
        }
        if rsize < 5 || (rsize - 2) % 3 != 0 {
            return Err(KernelError::Corrupt("Type 2 record size is not 2 + 3k"));
        }
        if n == 0 {
            return Err(KernelError::Corrupt("Type 2 segment has no records"));
        }
        let last_record_word = rsize
            .checked_mul(n)
            .and_then(|words| words.checked_add(seg.begin_addr + 3))
            .ok_or(KernelError::Corrupt("Type 2 records overrun the segment"))?;
        if last_record_word > seg.end_addr {
            return Err(KernelError::Corrupt("Type 2 records overrun the segment"));
        }
        Ok(Type2Directory {
            init,
            intlen,
            rsize,
            n,
        })
    }

    fn evaluate_segment(
        &self,
        seg: &SpkSegment,
        epoch_tdb_s: f64,
    ) -> Result<SpkEvaluation, KernelError> {
        if seg.data_type != 2 {
            return Err(KernelError::UnsupportedType {
                target: seg.target,
                data_type: seg.data_type,
            });
        }
        let dir = self.directory(seg)?;
        let idx = (((epoch_tdb_s - dir.init) / dir.intlen).floor().max(0.0) as usize).min(dir.n - 1);
        let rec = seg.begin_addr + idx * dir.rsize;

        let mid = self.word(rec)?;
        let radius = self.word(rec + 1)?;
        if radius.is_nan() || radius <= 0.0 {
            return Err(KernelError::Corrupt("Type 2 record radius must be positive"));
        }
        let s = (epoch_tdb_s - mid) / radius;
        let ncoef = (dir.rsize - 2) / 3;

        let mut coeffs = vec![0.0; ncoef];
        let mut position_km = [0.0; 3];
        let mut velocity_km_s = [0.0; 3];
        for axis in 0..3 {
            let first = rec + 2 + axis * ncoef;
            for (k, c) in coeffs.iter_mut().enumerate() {
                *c = self.word(first + k)?;
            }
            let (p, dp) = value_and_derivative(&coeffs, s);
            position_km[axis] = p;
            velocity_km_s[axis] = dp / radius;
        }
        Ok(SpkEvaluation {
            position_km,
            velocity_km_s,
        })
    }
}

/// Directory counts are stored as doubles; they must be whole and in range.
fn whole_count(word: f64) -> Result<usize, KernelError> {
    if !word.is_finite() || word < 0.0 || word.fract() != 0.0 || word > u32::MAX as f64 {
        return Err(KernelError::Corrupt("Type 2 directory count is not a whole number"));
    }
    Ok(word as usize)
}

/// Map a planet body code (`x99`) to its system barycenter (`x`).
///
/// Earth (399) and the Moon (301) are left alone: they hang off the
/// Earth-Moon barycenter through their own segments.
pub const fn planet_body_to_barycenter(code: i32) -> i32 {
    if code > 100 && code < 1000 && code % 100 == 99 && code != 399 {
        code / 100
    } else {
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barycenter_mapping() {
        assert_eq!(planet_body_to_barycenter(499), 4);
        assert_eq!(planet_body_to_barycenter(599), 5);
        assert_eq!(planet_body_to_barycenter(199), 1);
        assert_eq!(planet_body_to_barycenter(399), 399);
        assert_eq!(planet_body_to_barycenter(301), 301);
        assert_eq!(planet_body_to_barycenter(10), 10);
        assert_eq!(planet_body_to_barycenter(3), 3);
    }

    #[test]
    fn rejects_short_file() {
        assert!(matches!(
            SpkKernel::from_bytes(vec![0u8; 100]),
            Err(KernelError::InvalidHeader(_))
        ));
    }

    #[test]
    fn rejects_wrong_id_word() {
        let mut bytes = vec![b' '; 1024];
        bytes[0..8].copy_from_slice(b"DAF/PCK ");
        assert!(matches!(
            SpkKernel::from_bytes(bytes),
            Err(KernelError::InvalidHeader(_))
        ));
    }

    #[test]
    fn directory_counts_must_be_whole() {
        assert_eq!(whole_count(11.0), Ok(11));
        assert!(whole_count(f64::NAN).is_err());
        assert!(whole_count(f64::INFINITY).is_err());
        assert!(whole_count(-3.0).is_err());
        assert!(whole_count(7.5).is_err());
        assert!(whole_count(1e300).is_err());
    }

    #[test]
    fn endian_tags() {
        assert_eq!(Endian::Little.format_tag(), b"LTL-IEEE");
        assert_eq!(Endian::Big.format_tag(), b"BIG-IEEE");
    }
}
