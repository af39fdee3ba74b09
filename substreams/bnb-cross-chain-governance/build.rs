use anyhow::Result;
use substreams_ethereum::Abigen;

fn main() -> Result<(), anyhow::Error> {
    Abigen::new("OmnichainGovernanceExecutor", "abi/OmnichainGovernanceExecutor.json")?
        .generate()?
        .write_to_file("src/abi/omnichain_governance_executor.rs")?;
    Abigen::new("OmnichainExecutorOwner", "abi/OmnichainExecutorOwner.json")?
        .generate()?
        .write_to_file("src/abi/omnichain_executor_owner.rs")?;
    Abigen::new("AccessControlManager", "abi/AccessControlManager.json")?
        .generate()?
        .write_to_file("src/abi/access_control_manager.rs")?;
    anyhow::Ok(())
}
