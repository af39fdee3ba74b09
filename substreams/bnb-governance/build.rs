use anyhow::Result;
use substreams_ethereum::Abigen;

fn main() -> Result<(), anyhow::Error> {
    Abigen::new("GovernorBravo", "abi/GovernorBravo.json")?
        .generate()?
        .write_to_file("src/abi/governor_bravo.rs")?;
    Abigen::new("XvsVault", "abi/XvsVault.json")?
        .generate()?
        .write_to_file("src/abi/xvs_vault.rs")?;
    Abigen::new("Xvs", "abi/Xvs.json")?
        .generate()?
        .write_to_file("src/abi/xvs.rs")?;
    Abigen::new("OmnichainProposalSender", "abi/OmnichainProposalSender.json")?
        .generate()?
        .write_to_file("src/abi/omnichain_proposal_sender.rs")?;
    Abigen::new("AccessControlManager", "abi/AccessControlManager.json")?
        .generate()?
        .write_to_file("src/abi/access_control_manager.rs")?;
    anyhow::Ok(())
}
