use std::path::PathBuf;

use prost::Message;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto");

    let mut compiler = protox::Compiler::new(["proto"])?;
    compiler.include_imports(true).include_source_info(false);
    compiler.open_file("ord/dataset.proto")?;

    let out = PathBuf::from(std::env::var("OUT_DIR")?).join("ord_descriptor.bin");
    std::fs::write(out, compiler.file_descriptor_set().encode_to_vec())?;
    Ok(())
}
