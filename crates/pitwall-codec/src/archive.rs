//! Zip archive packing of a whole profile.
//!
//! The archive holds one entry per profile part, named like the part files
//! on disk, so an exported archive unpacks into a profile directory byte for
//! byte.

use std::collections::BTreeMap;
use std::io::{Cursor, Read, Write};

use pitwall_core::{OnUpdate, Profile, decode_parts, encode_parts};
use zip::read::ZipArchive;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::error::CodecError;

/// Pack a profile into zip bytes, one entry per part.
///
/// # Errors
///
/// Returns [`CodecError`] when a part fails to encode or the archive fails
/// to write.
pub fn pack(profile: &Profile) -> Result<Vec<u8>, CodecError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (part, bytes) in encode_parts(profile)? {
        writer.start_file(part.file_name(), options)?;
        writer.write_all(&bytes)?;
    }
    Ok(writer.finish()?.into_inner())
}

/// Unpack zip bytes into a profile.
///
/// Entries are matched by part file name; unknown entries are ignored and
/// missing parts decode to defaults. The caller fills schedule gaps.
///
/// # Errors
///
/// Returns [`CodecError`] when the container or a contained part is
/// malformed.
pub fn unpack(bytes: &[u8], on_update: OnUpdate) -> Result<Profile, CodecError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut files = BTreeMap::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_owned();
        let mut data = Vec::new();
        entry.read_to_end(&mut data)?;
        files.insert(name, data);
    }
    Ok(decode_parts(&files, on_update)?)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pitwall_core::{ProfilePart, TeamEntry};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn packed_profile_unpacks_with_data_intact() {
        let profile = Profile::empty();
        let mut team_data = profile.team_data.get();
        team_data.insert(
            "254".to_owned(),
            TeamEntry {
                strengths: "autos".to_owned(),
                ..TeamEntry::default()
            },
        );
        profile.team_data.replace(team_data);

        let bytes = pack(&profile).unwrap();
        let unpacked = unpack(&bytes, Arc::new(|| {})).unwrap();

        assert_eq!(unpacked.team_data.get()["254"].strengths, "autos");
    }

    #[test]
    fn archive_holds_one_entry_per_part() {
        let bytes = pack(&Profile::empty()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|index| archive.by_index(index).unwrap().name().to_owned())
            .collect();
        let expected: Vec<String> = ProfilePart::ALL
            .iter()
            .map(|part| part.file_name().to_owned())
            .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn garbage_bytes_are_an_archive_error() {
        let err = unpack(b"not a zip", Arc::new(|| {})).unwrap_err();
        assert!(matches!(err, CodecError::Archive(_)));
    }
}
