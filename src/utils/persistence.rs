use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

const TMP_SUFFIX: &str = "tmp";

/// Sibling staging path: `accounts.dbf` becomes `accounts.dbf.tmp`.
pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Replaces `path` with `data` by writing the staging file and renaming it over the target.
pub(crate) fn replace_file(path: &Path, data: &str) -> io::Result<()> {
    let tmp = tmp_path(path);
    write_atomic(&tmp, data)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("data/accounts.dbf")),
            PathBuf::from("data/accounts.dbf.tmp")
        );
        assert_eq!(tmp_path(Path::new("accounts")), PathBuf::from("accounts.tmp"));
    }

    #[test]
    fn replace_file_overwrites_and_cleans_up() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        replace_file(&path, "first").expect("first write");
        replace_file(&path, "second").expect("second write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "second");
        assert!(!tmp_path(&path).exists());
    }
}
