//! Synthetic JPEG fixtures for tests.

use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};

const TAG_ORIENTATION: u16 = 0x0112;
const TAG_DATE_TIME: u16 = 0x0132;
const TAG_EXIF_IFD: u16 = 0x8769;
const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;

const TYPE_ASCII: u16 = 2;
const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;

/// 2023-01-02 15:04:05, the timestamp most fixtures carry.
pub fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 1, 2)
        .unwrap()
        .and_hms_opt(15, 4, 5)
        .unwrap()
}

fn entry(buf: &mut Vec<u8>, tag: u16, typ: u16, count: u32, value: u32) {
    buf.extend_from_slice(&tag.to_le_bytes());
    buf.extend_from_slice(&typ.to_le_bytes());
    buf.extend_from_slice(&count.to_le_bytes());
    buf.extend_from_slice(&value.to_le_bytes());
}

fn ascii(s: &str) -> Vec<u8> {
    assert!(s.len() >= 4, "inline ASCII values are not supported");
    let mut v = s.as_bytes().to_vec();
    v.push(0);
    v
}

/// Little-endian TIFF block with an Orientation tag and, optionally, a
/// primary `DateTime` and an Exif IFD holding `DateTimeOriginal`.
fn tiff(date_time: Option<&str>, original: Option<&str>) -> Vec<u8> {
    let date_time = date_time.map(ascii);
    let original = original.map(ascii);

    let ifd0_entries = 1 + date_time.is_some() as u32 + original.is_some() as u32;
    let ifd0_len = 2 + 12 * ifd0_entries + 4;
    let mut data_offset = 8 + ifd0_len;

    let date_time_offset = data_offset;
    if let Some(v) = &date_time {
        data_offset += v.len() as u32;
    }
    let exif_ifd_offset = data_offset;

    let mut buf = Vec::new();
    buf.extend_from_slice(b"II");
    buf.extend_from_slice(&42u16.to_le_bytes());
    buf.extend_from_slice(&8u32.to_le_bytes());

    buf.extend_from_slice(&(ifd0_entries as u16).to_le_bytes());
    entry(&mut buf, TAG_ORIENTATION, TYPE_SHORT, 1, 1);
    if let Some(v) = &date_time {
        entry(&mut buf, TAG_DATE_TIME, TYPE_ASCII, v.len() as u32, date_time_offset);
    }
    if original.is_some() {
        entry(&mut buf, TAG_EXIF_IFD, TYPE_LONG, 1, exif_ifd_offset);
    }
    buf.extend_from_slice(&0u32.to_le_bytes());

    if let Some(v) = &date_time {
        buf.extend_from_slice(v);
    }
    if let Some(v) = &original {
        let value_offset = exif_ifd_offset + 2 + 12 + 4;
        buf.extend_from_slice(&1u16.to_le_bytes());
        entry(&mut buf, TAG_DATE_TIME_ORIGINAL, TYPE_ASCII, v.len() as u32, value_offset);
        buf.extend_from_slice(&0u32.to_le_bytes());
        buf.extend_from_slice(v);
    }
    buf
}

/// Minimal JPEG: SOI, an Exif APP1 segment, EOI.
pub fn jpeg_with_exif(date_time: Option<&str>, original: Option<&str>) -> Vec<u8> {
    let tiff = tiff(date_time, original);
    let mut buf = vec![0xFF, 0xD8, 0xFF, 0xE1];
    buf.extend_from_slice(&((2 + 6 + tiff.len()) as u16).to_be_bytes());
    buf.extend_from_slice(b"Exif\0\0");
    buf.extend_from_slice(&tiff);
    buf.extend_from_slice(&[0xFF, 0xD9]);
    buf
}

/// Write a JPEG whose `DateTimeOriginal` is `taken` (EXIF `YYYY:MM:DD HH:MM:SS`).
pub fn write_photo(dir: &Path, name: &str, taken: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, jpeg_with_exif(None, Some(taken))).unwrap();
    path
}
