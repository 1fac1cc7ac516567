//! Capture time extraction from embedded EXIF metadata.

use crate::error::MetadataError;
use chrono::{NaiveDate, NaiveDateTime};
use exif::{In, Reader, Tag, Value};
use std::io::{BufRead, Seek, SeekFrom};

/// Decode the capture time from a stream positioned at the start of an image.
///
/// Prefers `DateTimeOriginal` and falls back to the primary `DateTime` tag.
/// On success the stream is rewound to the start so the caller can copy the
/// full content. Opening and closing the stream is left to the caller.
pub fn read_capture_time<R: BufRead + Seek>(
    reader: &mut R,
) -> Result<NaiveDateTime, MetadataError> {
    let exif = Reader::new().read_from_container(reader)?;

    reader.seek(SeekFrom::Start(0)).map_err(MetadataError::Stream)?;

    let field = exif
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .or_else(|| exif.get_field(Tag::DateTime, In::PRIMARY))
        .ok_or(MetadataError::MissingCaptureTime)?;

    let raw = match &field.value {
        Value::Ascii(values) => values.first().ok_or(MetadataError::MissingCaptureTime)?,
        other => {
            return Err(MetadataError::InvalidCaptureTime(format!(
                "unexpected value type {:?}",
                other
            )));
        }
    };

    let dt = exif::DateTime::from_ascii(raw)?;
    NaiveDate::from_ymd_opt(dt.year.into(), dt.month.into(), dt.day.into())
        .and_then(|date| date.and_hms_opt(dt.hour.into(), dt.minute.into(), dt.second.into()))
        .ok_or_else(|| MetadataError::InvalidCaptureTime(String::from_utf8_lossy(raw).into_owned()))
}
