use std::io::{self, Write};

use numcsv::*;

fn written(config: WriterConfig, f: impl FnOnce(&mut Writer<&mut Vec<u8>>)) -> String {
    let mut buf = Vec::new();
    {
        let mut w = Writer::with_config(&mut buf, config);
        f(&mut w);
        w.flush().unwrap();
    }
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_heading_joined_with_delimiter() {
    let out = written(WriterConfig::new(), |w| w.write_heading(&["a", "b", "c"]).unwrap());
    assert_eq!(out, "a,b,c\n");
}

#[test]
fn test_heading_quoted_with_crlf() {
    let config = WriterConfig::new()
        .with_delimiter("\t")
        .with_quote_heading(true)
        .with_crlf(true);
    let out = written(config, |w| w.write_heading(&["x", "y"]).unwrap());
    assert_eq!(out, "\"x\"\t\"y\"\r\n");
}

#[test]
fn test_record_default_is_scientific() {
    let out = written(WriterConfig::new(), |w| w.write(&[1.0, -0.5]).unwrap());
    assert_eq!(out, "1.0000000000000000e+00,-5.0000000000000000e-01\n");
}

#[test]
fn test_record_fixed_and_general() {
    let fixed = written(
        WriterConfig::new().with_float_format(FloatFormat::Fixed).with_delimiter(" "),
        |w| w.write(&[2.0, 0.125]).unwrap(),
    );
    assert_eq!(fixed, "2.0000000000000000 0.1250000000000000\n");

    let general = written(
        WriterConfig::new().with_float_format(FloatFormat::General),
        |w| w.write(&[2.0, 0.125, 6.02e23]).unwrap(),
    );
    assert_eq!(general, "2,0.125,6.02e+23\n");
}

#[test]
fn test_empty_record_is_an_empty_line() {
    let out = written(WriterConfig::new().with_crlf(true), |w| w.write(&[]).unwrap());
    assert_eq!(out, "\r\n");
}

#[test]
fn test_write_all_with_and_without_heading() {
    let table = Table::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let config = WriterConfig::new().with_float_format(FloatFormat::General);

    let mut buf = Vec::new();
    let heading = vec!["a".to_string(), "b".to_string()];
    Writer::with_config(&mut buf, config.clone())
        .write_all(Some(heading.as_slice()), &table)
        .unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "a,b\n1,2\n3,4\n");

    let mut buf = Vec::new();
    Writer::with_config(&mut buf, config).write_all(None, &table).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "1,2\n3,4\n");
}

#[test]
fn test_write_all_flushes_before_returning() {
    let table = Table::from_rows(vec![vec![1.0]]).unwrap();
    let mut w = Writer::new(Vec::new());
    w.write_all(None, &table).unwrap();
    let inner = w.into_inner().unwrap();
    assert_eq!(inner, b"1.0000000000000000e+00\n");
}

#[test]
fn test_write_dataset() {
    let dataset = Dataset::new(
        Some(vec!["t".to_string()]),
        Table::from_rows(vec![vec![0.5]]).unwrap(),
    );
    let mut buf = Vec::new();
    let mut w = Writer::with_config(&mut buf, WriterConfig::new().with_float_format(FloatFormat::General));
    write_dataset(&mut w, &dataset).unwrap();
    drop(w);
    assert_eq!(String::from_utf8(buf).unwrap(), "t\n0.5\n");
}

/// Accepts `limit` bytes, then fails every write.
struct FailingSink {
    accepted: Vec<u8>,
    limit: usize,
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.accepted.len() >= self.limit {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        let n = buf.len().min(self.limit - self.accepted.len());
        self.accepted.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sink_failure_is_stream_error_and_partial_output_stays() {
    let rows: Vec<Vec<f64>> = (0..2000).map(|i| vec![i as f64, 1.0]).collect();
    let table = Table::from_rows(rows).unwrap();
    let mut sink = FailingSink { accepted: Vec::new(), limit: 100 };

    {
        let mut w = Writer::new(&mut sink);
        let err = w.write_all(None, &table).unwrap_err();
        assert!(err.is_stream());
        assert!(w.flush().unwrap_err().is_stream());
    }

    // Nothing is rolled back: the bytes the sink took remain.
    assert_eq!(sink.accepted.len(), 100);
    assert!(sink.accepted.starts_with(b"0.0000000000000000e+00,"));
}
