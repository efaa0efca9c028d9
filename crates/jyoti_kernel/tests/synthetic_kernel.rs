//! SPK reader tests against kernels written by `write_type2_spk`.

use jyoti_kernel::{KernelError, SpkKernel, Type2Segment, jd_to_tdb_seconds, write_type2_spk};

const DAY: f64 = 86_400.0;

/// Segment with `n` one-day records of a linear track `p(t) = p0 + v t`
/// (t in seconds from `init`).
fn linear_segment(target: i32, center: i32, p0: [f64; 3], v: [f64; 3], n: usize) -> Type2Segment {
    let init = -(n as f64) * DAY / 2.0;
    let radius = DAY / 2.0;
    let records = (0..n)
        .map(|i| {
            let mid = init + (i as f64 + 0.5) * DAY;
            let t_mid = mid - init;
            let mut rec = vec![mid, radius];
            for axis in 0..3 {
                // value at mid, slope per unit s, and one zero quadratic term
                rec.push(p0[axis] + v[axis] * t_mid);
                rec.push(v[axis] * radius);
                rec.push(0.0);
            }
            rec
        })
        .collect();
    Type2Segment {
        target,
        center,
        frame: 1,
        init_tdb_s: init,
        intlen_s: DAY,
        records,
    }
}

fn fixture() -> SpkKernel {
    let segments = vec![
        linear_segment(10, 0, [1000.0, -500.0, 20.0], [0.001, 0.0, 0.0], 10),
        linear_segment(3, 0, [1.4e8, 2.0e7, 0.0], [-4.0, 29.0, 0.0], 10),
        linear_segment(399, 3, [4000.0, 0.0, 0.0], [0.0, 0.01, 0.0], 10),
        linear_segment(4, 0, [-2.0e8, 1.0e8, 5.0e6], [-10.0, -20.0, 0.5], 10),
    ];
    let bytes = write_type2_spk("synthetic", &segments).expect("write fixture");
    SpkKernel::from_bytes(bytes).expect("read fixture")
}

#[test]
fn reads_segment_table() {
    let k = fixture();
    assert_eq!(k.segments().len(), 4);
    assert_eq!(k.header().internal_name, "synthetic");
    let earth = k.segments().iter().find(|s| s.target == 399).expect("earth");
    assert_eq!(earth.center, 3);
    assert_eq!(earth.data_type, 2);
    assert_eq!(k.center_for(4), Some(0));
    assert_eq!(k.center_for(5), None);
}

#[test]
fn evaluates_linear_track() {
    let k = fixture();
    let t = 1234.5;
    let init = -5.0 * DAY;
    let e = k.evaluate(3, 0, t).expect("evaluate EMB");
    let expect_x = 1.4e8 - 4.0 * (t - init);
    let expect_y = 2.0e7 + 29.0 * (t - init);
    assert!((e.position_km[0] - expect_x).abs() < 1e-6, "x = {}", e.position_km[0]);
    assert!((e.position_km[1] - expect_y).abs() < 1e-6, "y = {}", e.position_km[1]);
    assert!((e.velocity_km_s[0] + 4.0).abs() < 1e-9);
    assert!((e.velocity_km_s[1] - 29.0).abs() < 1e-9);
}

#[test]
fn mars_resolves_through_barycenter() {
    let k = fixture();
    let direct = k.evaluate(4, 0, 0.0).expect("bary");
    let chained = k.resolve_to_ssb(499, 0.0).expect("499 via 4");
    for i in 0..3 {
        assert!((direct.position_km[i] - chained[i]).abs() < 1e-9);
    }
}

#[test]
fn earth_chain_sums_segments() {
    let k = fixture();
    let emb = k.evaluate(3, 0, 0.0).expect("emb");
    let geo = k.evaluate(399, 3, 0.0).expect("earth");
    let ssb = k.resolve_to_ssb(399, 0.0).expect("earth ssb");
    for i in 0..3 {
        let sum = emb.position_km[i] + geo.position_km[i];
        assert!((ssb[i] - sum).abs() < 1e-6);
    }
}

#[test]
fn epoch_outside_coverage() {
    let k = fixture();
    let far = jd_to_tdb_seconds(2_460_000.0);
    assert!(matches!(
        k.evaluate(10, 0, far),
        Err(KernelError::EpochOutOfRange { target: 10, .. })
    ));
}

#[test]
fn missing_body() {
    let k = fixture();
    assert!(matches!(
        k.evaluate(301, 3, 0.0),
        Err(KernelError::SegmentNotFound { target: 301, center: 3 })
    ));
    assert!(matches!(
        k.resolve_to_ssb(301, 0.0),
        Err(KernelError::SegmentNotFound { .. })
    ));
}

#[test]
fn loads_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tiny.bsp");
    let bytes = write_type2_spk("disk", &[linear_segment(10, 0, [1.0, 2.0, 3.0], [0.0; 3], 2)])
        .expect("write");
    std::fs::write(&path, bytes).expect("save");
    let k = SpkKernel::load(&path).expect("load");
    let e = k.evaluate(10, 0, 0.0).expect("sun");
    assert!((e.position_km[2] - 3.0).abs() < 1e-12);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = SpkKernel::load(&dir.path().join("nope.bsp")).unwrap_err();
    assert!(matches!(err, KernelError::Io(_)));
}

#[test]
fn writer_rejects_ragged_records() {
    let mut seg = linear_segment(10, 0, [0.0; 3], [0.0; 3], 2);
    seg.records[1].pop();
    assert!(write_type2_spk("bad", &[seg]).is_err());
}

/// Overwrite one Type 2 directory word (0 = init ... 3 = n) of `target`'s segment.
fn patch_directory(target: i32, word: usize, value: f64) -> Vec<u8> {
    let segments = vec![
        linear_segment(10, 0, [0.0; 3], [0.0; 3], 4),
        linear_segment(399, 3, [0.0; 3], [0.0; 3], 4),
    ];
    let mut bytes = write_type2_spk("patched", &segments).expect("write");
    let seg = SpkKernel::from_bytes(bytes.clone())
        .expect("clean kernel parses")
        .segments()
        .iter()
        .find(|s| s.target == target)
        .cloned()
        .expect("segment");
    let addr = seg.end_addr - 3 + word;
    let offset = (addr - 1) * 8;
    bytes[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
    bytes
}

#[test]
fn corrupt_directory_fails_at_load() {
    for (word, value) in [
        (2, f64::NAN),
        (3, f64::NAN),
        (2, 1e300),
        (3, 1e300),
        (2, 11.5),
        (1, f64::NAN),
        (3, 0.0),
    ] {
        let bytes = patch_directory(399, word, value);
        assert!(
            matches!(SpkKernel::from_bytes(bytes), Err(KernelError::Corrupt(_))),
            "word {word} = {value} accepted"
        );
    }
}
