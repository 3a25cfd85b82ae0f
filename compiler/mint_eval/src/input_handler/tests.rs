use super::*;

fn read_one(handler: &InputHandlerImpl) -> Result<i64, InputError> {
    let mut reader = handler.open()?;
    read_integer(&mut reader)
}

#[test]
fn parses_a_plain_line() {
    let mut reader = io::Cursor::new(b"42\n".to_vec());
    assert_eq!(read_integer(&mut reader).ok(), Some(42));
}

#[test]
fn trims_surrounding_whitespace() {
    let mut reader = io::Cursor::new(b"  -17 \r\n".to_vec());
    assert_eq!(read_integer(&mut reader).ok(), Some(-17));
}

#[test]
fn reads_only_the_first_line() {
    let mut reader = io::Cursor::new(b"1\n2\n".to_vec());
    assert_eq!(read_integer(&mut reader).ok(), Some(1));
}

#[test]
fn takes_first_word_of_the_line() {
    let mut reader = io::Cursor::new(b"12 34\n".to_vec());
    assert_eq!(read_integer(&mut reader).ok(), Some(12));
}

#[test]
fn trailing_text_after_first_word_is_ignored() {
    let mut reader = io::Cursor::new(b"  7\tapples\n".to_vec());
    assert_eq!(read_integer(&mut reader).ok(), Some(7));
}

#[test]
fn rejects_non_numeric_text() {
    let mut reader = io::Cursor::new(b"abc\n".to_vec());
    match read_integer(&mut reader) {
        Err(InputError::Malformed { text }) => assert_eq!(text, "abc"),
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn empty_stream_is_closed() {
    let mut reader = io::empty();
    assert!(matches!(read_integer(&mut reader), Err(InputError::Closed)));
}

#[test]
fn blank_line_is_malformed() {
    let mut reader = io::Cursor::new(b"\n".to_vec());
    assert!(matches!(
        read_integer(&mut reader),
        Err(InputError::Malformed { .. })
    ));
}

#[test]
fn scripted_answers_in_order() {
    let handler = lines_handler(["3", "4"]);
    assert_eq!(read_one(&handler).ok(), Some(3));
    assert_eq!(read_one(&handler).ok(), Some(4));
}

#[test]
fn scripted_exhaustion_reads_as_closed() {
    let handler = lines_handler(Vec::<String>::new());
    assert!(matches!(read_one(&handler), Err(InputError::Closed)));
}

#[test]
fn scripted_unavailable_fails_to_open() {
    let handler = scripted_handler([ScriptedInput::Unavailable, ScriptedInput::Line("9".into())]);
    assert!(matches!(handler.open(), Err(InputError::Unavailable(_))));
    assert_eq!(read_one(&handler).ok(), Some(9));
}

#[test]
fn scripted_queue_is_consumed_once() {
    let handler = ScriptedInputHandler::new([ScriptedInput::Line("1".into())]);
    assert!(handler.open().is_ok());
    let mut reader = handler.open().unwrap();
    assert!(matches!(read_integer(&mut *reader), Err(InputError::Closed)));
}

#[test]
fn terminal_with_missing_device_is_unavailable() {
    let handler = InputHandlerImpl::Terminal(TerminalInputHandler::with_path(
        "/nonexistent/mint-terminal-device",
    ));
    assert!(matches!(handler.open(), Err(InputError::Unavailable(_))));
}

#[test]
fn terminal_defaults_to_platform_device() {
    let handler = TerminalInputHandler::default();
    assert_eq!(handler.path, std::path::PathBuf::from(TERMINAL_PATH));
}
