use fastio_writer::{FastWriter, IoConfig, LineEnding};
use pretty_assertions::assert_eq;

fn render<F>(f: F) -> String
where
    F: FnOnce(&mut FastWriter<&mut Vec<u8>>),
{
    let mut out = Vec::new();
    {
        let mut writer = FastWriter::new(&mut out);
        f(&mut writer);
        assert!(!writer.check_error());
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn test_print_scalars() {
    let out = render(|w| {
        w.print(42);
        w.print(' ');
        w.print(-9_000_000_000_i64);
        w.print(' ');
        w.print(2.5);
        w.print(' ');
        w.print('c');
        w.print(' ');
        w.print("str");
        w.print(' ');
        w.print(String::from("owned"));
    });
    assert_eq!(out, "42 -9000000000 2.5 c str owned");
}

#[test]
fn test_println() {
    let out = render(|w| {
        w.println("Fast IO Library Example");
        w.println(7);
        w.newline();
        w.println('x');
    });
    assert_eq!(out, "Fast IO Library Example\n7\n\nx\n");
}

#[test]
fn test_print_array() {
    assert_eq!(render(|w| w.print_array([1, 2, 3])), "1 2 3\n");
}

#[test]
fn test_print_array_empty() {
    assert_eq!(render(|w| w.print_array(Vec::<i64>::new())), "\n");
}

#[test]
fn test_print_array_single_and_mixed_sources() {
    let longs = vec![10_000_000_000_i64, -1];
    let words = ["a", "bc"];
    let out = render(|w| {
        w.print_array([7]);
        w.print_array(&longs);
        w.print_array(words.iter());
    });
    assert_eq!(out, "7\n10000000000 -1\na bc\n");
}

#[test]
fn test_print_then_array_on_same_line() {
    let out = render(|w| {
        w.print("Array: ");
        w.print_array(&[1, 2, 3, 4, 5]);
    });
    assert_eq!(out, "Array: 1 2 3 4 5\n");
}

#[test]
fn test_crlf_line_ending() {
    let mut out = Vec::new();
    {
        let mut writer = FastWriter::new(&mut out).with_line_ending(LineEnding::CrLf);
        assert_eq!(writer.line_ending(), LineEnding::CrLf);
        writer.println(1);
        writer.newline();
        writer.print_array(["x", "y"]);
    }
    assert_eq!(out, b"1\r\n\r\nx y\r\n");
}

#[test]
fn test_output_is_buffered_until_flush() {
    let mut writer = FastWriter::new(Vec::new());
    writer.println("pending");
    let out = writer.into_inner().unwrap();
    assert_eq!(out, b"pending\n");
}

#[test]
fn test_drop_flushes() {
    let mut out = Vec::new();
    {
        let mut writer = FastWriter::new(&mut out);
        writer.print("dropped");
    }
    assert_eq!(out, b"dropped");
}

#[test]
fn test_tiny_buffer() {
    let config = IoConfig::new().with_buffer_capacity(1);
    let mut out = Vec::new();
    {
        let mut writer = FastWriter::with_config(&mut out, config);
        writer.print_array(0..5);
        writer.println("end");
        writer.close();
    }
    assert_eq!(out, b"0 1 2 3 4\nend\n");
}

#[test]
fn test_display_of_user_type() {
    struct Point(i32, i32);
    impl std::fmt::Display for Point {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "({}, {})", self.0, self.1)
        }
    }
    let out = render(|w| w.println(Point(1, -2)));
    assert_eq!(out, "(1, -2)\n");
}
