//! Integration tests for the file-change wire format

use scriptalias_transport::{
    FILE_CHANGE_TYPE_AND_VERSION, FileChange, LineChange, TransportError,
};

fn sample() -> FileChange {
    FileChange {
        from_disk: false,
        buffer: String::new(),
        file_name: "build.cake".to_string(),
        line_changes: vec![LineChange {
            start_line: 3,
            end_line: 3,
            start_column: 0,
            end_column: 4,
            new_text: "Task".to_string(),
        }],
    }
}

#[test]
fn test_byte_layout() {
    let bytes = sample().to_bytes().unwrap();

    let mut expected = Vec::new();
    expected.extend_from_slice(&FILE_CHANGE_TYPE_AND_VERSION.to_le_bytes());
    expected.push(0); // from disk
    expected.push(0); // empty buffer
    expected.push(10);
    expected.extend_from_slice(b"build.cake");
    expected.extend_from_slice(&1i32.to_le_bytes());
    for value in [3i32, 3, 0, 4] {
        expected.extend_from_slice(&value.to_le_bytes());
    }
    expected.push(4);
    expected.extend_from_slice(b"Task");

    assert_eq!(bytes, expected);
}

#[test]
fn test_full_buffer_change_round_trips() {
    let change = FileChange {
        from_disk: true,
        buffer: "var target = Argument(\"target\", \"Default\");\nRunTarget(target);".to_string(),
        file_name: "/src/ünïcode/build.cake".to_string(),
        line_changes: Vec::new(),
    };
    let bytes = change.to_bytes().unwrap();
    assert_eq!(FileChange::from_bytes(&bytes).unwrap(), change);
}

#[test]
fn test_stream_of_several_changes() {
    let mut stream = Vec::new();
    let first = sample();
    let second = FileChange {
        file_name: "other.cake".to_string(),
        ..sample()
    };
    first.write_to(&mut stream).unwrap();
    second.write_to(&mut stream).unwrap();

    let mut reader: &[u8] = &stream;
    assert_eq!(FileChange::read_from(&mut reader).unwrap(), first);
    assert_eq!(FileChange::read_from(&mut reader).unwrap(), second);
    assert!(reader.is_empty());
}

#[test]
fn test_wrong_type_and_version_is_rejected() {
    let mut bytes = sample().to_bytes().unwrap();
    bytes[0] = 0x02;

    let err = FileChange::from_bytes(&bytes).unwrap_err();
    assert!(
        matches!(
            err,
            TransportError::TypeAndVersionMismatch {
                expected: FILE_CHANGE_TYPE_AND_VERSION,
                actual: 0x0102,
            }
        ),
        "{err}"
    );
}

#[test]
fn test_truncated_input_is_an_io_error() {
    let bytes = sample().to_bytes().unwrap();
    let err = FileChange::from_bytes(&bytes[..bytes.len() - 2]).unwrap_err();
    assert!(matches!(err, TransportError::Io(_)), "{err}");
}

#[test]
fn test_negative_line_change_count_is_rejected() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&FILE_CHANGE_TYPE_AND_VERSION.to_le_bytes());
    bytes.push(1);
    bytes.push(0);
    bytes.push(0);
    bytes.extend_from_slice(&(-1i32).to_le_bytes());

    let err = FileChange::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, TransportError::InvalidLength(_)), "{err}");
}
