use crate::DynResult;
use std::io::Read;

/// The two texts being compared, with the names to show for them.
#[derive(Debug, Default)]
pub struct ProgramInput {
    pub texts: [String; 2],
    pub names: [String; 2],
}

fn read_source(source: &str, stdin: &mut impl Read) -> DynResult<String> {
    let bytes = if source == "-" {
        let mut buffer = vec![];
        stdin.read_to_end(&mut buffer)?;
        buffer
    } else {
        std::fs::read(source).map_err(|e| format!("cannot read '{source}': {e}"))?
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads both inputs. `-` stands for standard input, which can be used only once.
pub fn read_inputs(sources: [&str; 2], stdin: &mut impl Read) -> DynResult<ProgramInput> {
    if sources.iter().all(|&s| s == "-") {
        return Err("standard input can be used for only one of the texts")?;
    }
    let mut result = ProgramInput::default();
    for side in 0..2 {
        result.texts[side] = read_source(sources[side], stdin)?;
        result.names[side] = match sources[side] {
            "-" => "<stdin>".to_owned(),
            name => name.to_owned(),
        };
        log::debug!("read {} bytes from {}", result.texts[side].len(), result.names[side]);
    }
    Ok(result)
}

/// Takes both texts verbatim from the command line.
pub fn literal_inputs(texts: [&str; 2]) -> ProgramInput {
    ProgramInput {
        texts: texts.map(str::to_owned),
        names: ["original".to_owned(), "modified".to_owned()],
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn temp_file(name: &str, content: &[u8]) -> String {
        let path = std::env::temp_dir().join(format!("smiletxt-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn reads_files_and_stdin() {
        let path = temp_file("original.txt", "猫追狗".as_bytes());
        let input = read_inputs([path.as_str(), "-"], &mut Cursor::new("猫追了狗")).unwrap();
        assert_eq!(input.texts, ["猫追狗".to_owned(), "猫追了狗".to_owned()]);
        assert_eq!(input.names[1], "<stdin>");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let path = temp_file("invalid.txt", b"a\xffb");
        let input = read_inputs([path.as_str(), path.as_str()], &mut Cursor::new("")).unwrap();
        assert_eq!(input.texts[0], "a\u{FFFD}b");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn stdin_twice_is_an_error() {
        assert!(read_inputs(["-", "-"], &mut Cursor::new("x")).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let error = read_inputs(["/nonexistent/smiletxt", "-"], &mut Cursor::new("")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/smiletxt"));
    }

    #[test]
    fn literal() {
        let input = literal_inputs(["a", ""]);
        assert_eq!(input.texts, ["a".to_owned(), String::new()]);
    }
}
