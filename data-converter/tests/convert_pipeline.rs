//! End-to-end conversion pipeline tests
//!
//! Drives a full run against real directories: vendor text files in, files
//! in the canonical engine layout out.

use std::fs;

use data_converter::convert::{self, ConversionJob};
use market_common::data::Resolution;
use market_common::storage::CsvBarWriter;

#[test]
fn converts_vendor_dump_into_canonical_layout() {
    let source = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();

    fs::write(
        source.path().join("NIFTY.txt"),
        "IDX,20190226,091500,10800.00,10810.50,10795.25,10805.75,0\n\
         IDX,20190226,091600,10805.75,10815.00,10801.00,10810.25,1200\n\
         \n",
    )
    .unwrap();
    fs::write(
        source.path().join("BANKNIFTY.txt"),
        "IDX,20190226,091500,27100.00,27110.00,27090.00,27105.50,0\n",
    )
    .unwrap();

    let mut job = ConversionJob::new(source.path(), dest.path(), Resolution::Minute);
    convert::run(&mut job, &CsvBarWriter, None).unwrap();

    assert_eq!(job.total, 2);
    assert_eq!(job.processed, 2);

    let nifty = fs::read_to_string(dest.path().join("equity/usa/minute/nifty.csv")).unwrap();
    assert_eq!(
        nifty,
        "20190226 09:15,10800.00,10810.50,10795.25,10805.75,0\n\
         20190226 09:16,10805.75,10815.00,10801.00,10810.25,1200\n"
    );

    // The override table maps the long-form index name to its short ticker
    let bnf = fs::read_to_string(dest.path().join("equity/usa/minute/bnf.csv")).unwrap();
    assert_eq!(bnf, "20190226 09:15,27100.00,27110.00,27090.00,27105.50,0\n");
}

#[test]
fn rerun_overwrites_prior_canonical_files() {
    let source = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    let target = source.path().join("NIFTY.txt");

    fs::write(
        &target,
        "IDX,20190226,091500,10800.00,10810.50,10795.25,10805.75,0\n\
         IDX,20190226,091600,10805.75,10815.00,10801.00,10810.25,1200\n",
    )
    .unwrap();
    let mut job = ConversionJob::new(source.path(), dest.path(), Resolution::Minute);
    convert::run(&mut job, &CsvBarWriter, None).unwrap();

    fs::write(
        &target,
        "IDX,20190227,091500,10810.00,10820.00,10805.00,10815.00,500\n",
    )
    .unwrap();
    let mut job = ConversionJob::new(source.path(), dest.path(), Resolution::Minute);
    convert::run(&mut job, &CsvBarWriter, None).unwrap();

    let nifty = fs::read_to_string(dest.path().join("equity/usa/minute/nifty.csv")).unwrap();
    assert_eq!(nifty, "20190227 09:15,10810.00,10820.00,10805.00,10815.00,500\n");
}

#[test]
fn missing_source_directory_writes_nothing() {
    let dest = tempfile::tempdir().unwrap();

    let mut job = ConversionJob::new(
        dest.path().join("does-not-exist"),
        dest.path(),
        Resolution::Minute,
    );
    let err = convert::run(&mut job, &CsvBarWriter, None).unwrap_err();

    assert!(err.to_string().contains("source directory"));
    assert!(fs::read_dir(dest.path()).unwrap().next().is_none());
}
