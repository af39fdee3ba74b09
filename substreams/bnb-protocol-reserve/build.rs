use anyhow::Result;
use substreams_ethereum::Abigen;

fn main() -> Result<(), anyhow::Error> {
    Abigen::new("TokenConverter", "abi/TokenConverter.json")?
        .generate()?
        .write_to_file("src/abi/token_converter.rs")?;
    Abigen::new("ConverterNetwork", "abi/ConverterNetwork.json")?
        .generate()?
        .write_to_file("src/abi/converter_network.rs")?;
    anyhow::Ok(())
}
