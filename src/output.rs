//! Persist a parameter set: the bytes go to a sibling temp file that is
//! renamed over the target, so the target is either absent, the old file,
//! or the complete new file.

use crate::param::PubParam;
use crate::pixel_err::PixelError;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{info, warn};

/// Write `bytes` to `path` atomically.
/// On failure the temp file is removed and the target is left untouched.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), PixelError> {
    let path = path.as_ref();
    let tmp = tmp_path(path);

    if let Err(e) = write_then_rename(&tmp, path, bytes) {
        if tmp.exists() {
            if let Err(rm) = fs::remove_file(&tmp) {
                warn!(path = %tmp.display(), error = %rm, "failed to remove temp file");
            }
        }
        return Err(e.into());
    }
    info!(path = %path.display(), len = bytes.len(), "wrote parameter file");
    Ok(())
}

/// Serialize `pp` uncompressed and write it to `path` atomically.
pub fn write_param<P: AsRef<Path>>(path: P, pp: &PubParam) -> Result<(), PixelError> {
    let buf = pp.to_bytes()?;
    write_atomic(path, &buf)
}

/// `<path>.<pid>.tmp`, in the same directory so that the rename stays on one
/// file system; concurrent writers of the same target use distinct temp files.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{}.tmp", process::id()));
    PathBuf::from(name)
}

fn write_then_rename(tmp: &Path, path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    fs::rename(tmp, path)
}
