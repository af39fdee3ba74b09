use anyhow::Result;
use substreams_ethereum::Abigen;

fn main() -> Result<(), anyhow::Error> {
    Abigen::new("PoolRegistry", "abi/PoolRegistry.json")?
        .generate()?
        .write_to_file("src/abi/pool_registry.rs")?;
    Abigen::new("Comptroller", "abi/Comptroller.json")?
        .generate()?
        .write_to_file("src/abi/comptroller.rs")?;
    Abigen::new("VToken", "abi/VToken.json")?
        .generate()?
        .write_to_file("src/abi/vtoken.rs")?;
    Abigen::new("Erc20", "abi/Erc20.json")?
        .generate()?
        .write_to_file("src/abi/erc20.rs")?;
    Abigen::new("PriceOracle", "abi/PriceOracle.json")?
        .generate()?
        .write_to_file("src/abi/price_oracle.rs")?;
    anyhow::Ok(())
}
