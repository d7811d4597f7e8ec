use numcsv::{read_dataset, FloatFormat, Reader, ReaderConfig, Table, Writer, WriterConfig};

// Space delimited "ish": ragged spacing and a comment block before the heading.
const DATA: &str = "\
# generated by rig 4
# units: SI

x1   x2  x3    y
0.1  0.2  0.3  1.4
0.4 0.5   0.6  3.2
0.7  0.8 0.9   5.0
";

fn main() -> numcsv::Result<()> {
    let config = ReaderConfig::new()
        .with_delimiter(" ")
        .with_comment("#");
    let mut reader = Reader::with_config(DATA.as_bytes(), config);
    let dataset = read_dataset(&mut reader)?;

    let (rows, cols) = dataset.table.dims();
    println!("headings: {:?}", dataset.heading);
    println!("{rows} samples, {cols} columns");

    // Inputs are every column but the last; the output is the last column.
    let inputs = Table::from_rows(
        dataset.table.rows_iter().map(|row| row[..cols - 1].to_vec()).collect(),
    )?;
    let outputs = dataset.column_by_name("y").unwrap_or_default();
    println!("inputs: {:?}", inputs.dims());
    println!("outputs: {outputs:?}");

    let mut writer = Writer::with_config(
        std::io::stdout(),
        WriterConfig::new().with_float_format(FloatFormat::General),
    );
    writer.write_all(dataset.heading.as_deref(), &dataset.table)?;
    Ok(())
}
