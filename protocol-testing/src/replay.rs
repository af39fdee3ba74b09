use std::{fs, path::Path};

use base64::{engine::general_purpose::STANDARD, Engine};
use colored::Colorize;
use miette::{miette, IntoDiagnostic, WrapErr};
use prost::Message;
use serde_json::Value;
use similar::{ChangeTag, TextDiff};
use substreams_ethereum::pb::eth::v2::{self as eth};
use subgraph_substreams::prelude::*;
use tracing::info;

use bnb_core_pool::CorePool;
use bnb_cross_chain_governance::CrossChainGovernance;
use bnb_governance::GovernanceSubgraph;
use bnb_isolated_pools::IsolatedPools;
use bnb_protocol_reserve::ProtocolReserve;

use crate::config::{Package, ReplayFixture};

/// Off-chain reader: every supplementary call resolves to its reverted sentinel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

impl bnb_core_pool::reader::PoolReader for Offline {}

impl bnb_isolated_pools::reader::PoolReader for Offline {}

impl bnb_protocol_reserve::reader::ConverterReader for Offline {}

#[derive(Debug, Clone)]
pub struct ReplayOutcome {
    pub reports: Vec<BlockReport>,
    pub snapshot: Value,
}

impl ReplayOutcome {
    pub fn failed(&self) -> usize {
        self.reports.iter().map(|report| report.failed).sum()
    }
}

pub fn decode_block(encoded: &str) -> miette::Result<eth::Block> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .into_diagnostic()
        .wrap_err("block is not valid base64")?;
    eth::Block::decode(bytes.as_slice())
        .into_diagnostic()
        .wrap_err("block is not an encoded sf.ethereum.type.v2.Block")
}

pub fn encode_block(block: &eth::Block) -> String {
    STANDARD.encode(block.encode_to_vec())
}

fn run<G: Subgraph>(subgraph: &G, blocks: &[eth::Block]) -> miette::Result<ReplayOutcome> {
    let mut store = MemoryStore::new();
    let reports = blocks
        .iter()
        .map(|block| process_block(subgraph, &mut store, block))
        .collect();
    let snapshot = subgraph
        .snapshot(&store)
        .map_err(|e| miette!("failed to snapshot {}: {}", G::NAME, e))?;
    Ok(ReplayOutcome { reports, snapshot })
}

/// Replays `blocks` through a fresh store of `package`.
pub fn replay(package: Package, params: &str, blocks: &[eth::Block]) -> miette::Result<ReplayOutcome> {
    let invalid = |e: anyhow::Error| miette!("invalid params for {}: {}", package, e);

    match package {
        Package::CorePool => {
            let params = bnb_core_pool::params::Params::parse(params).map_err(invalid)?;
            run(&CorePool::new(params, Offline), blocks)
        }
        Package::IsolatedPools => {
            let params = bnb_isolated_pools::params::Params::parse(params).map_err(invalid)?;
            run(&IsolatedPools::new(params, Offline), blocks)
        }
        Package::Governance => {
            let params = bnb_governance::params::Params::parse(params).map_err(invalid)?;
            run(&GovernanceSubgraph::new(params), blocks)
        }
        Package::CrossChainGovernance => {
            let params = bnb_cross_chain_governance::params::Params::parse(params).map_err(invalid)?;
            run(&CrossChainGovernance::new(params), blocks)
        }
        Package::ProtocolReserve => {
            let params = bnb_protocol_reserve::params::Params::parse(params).map_err(invalid)?;
            run(&ProtocolReserve::new(params, Offline), blocks)
        }
    }
}

/// Runs a fixture and checks its snapshot against the expected one, if any.
pub fn run_fixture(fixture_path: &Path, colorize_output: bool) -> miette::Result<(Package, ReplayOutcome)> {
    let fixture = ReplayFixture::load(fixture_path)?;
    let blocks = fixture
        .blocks
        .iter()
        .map(|encoded| decode_block(encoded))
        .collect::<miette::Result<Vec<_>>>()?;

    info!("Replaying {} blocks through {}", blocks.len(), fixture.package);
    let outcome = replay(fixture.package, &fixture.params, &blocks)?;
    for report in &outcome.reports {
        info!(block = report.block_number, handled = report.handled, failed = report.failed, "replayed");
    }

    if let Some(expected) = &fixture.expected {
        let expected_path = fixture_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(expected);
        let expected: Value = serde_json::from_str(
            &fs::read_to_string(&expected_path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to read {}", expected_path.display()))?,
        )
        .into_diagnostic()?;

        if let Some(diff) = diff_snapshots(&expected, &outcome.snapshot, colorize_output)? {
            return Err(miette!("snapshot differs from {}:\n{}", expected_path.display(), diff));
        }
    }
    Ok((fixture.package, outcome))
}

/// Line diff of the two snapshots, `None` when they are equal.
pub fn diff_snapshots(expected: &Value, actual: &Value, colorize: bool) -> miette::Result<Option<String>> {
    if expected == actual {
        return Ok(None);
    }
    let left = serde_json::to_string_pretty(expected).into_diagnostic()?;
    let right = serde_json::to_string_pretty(actual).into_diagnostic()?;
    Ok(Some(format_diff(&left, &right, colorize)))
}

fn format_diff(left: &str, right: &str, colorize: bool) -> String {
    let diff = TextDiff::from_lines(left, right);

    let mut result = String::new();
    for change in diff.iter_all_changes() {
        let formatted = match change.tag() {
            ChangeTag::Delete => {
                let line = format!("-{}", change.value().trim_end());
                if colorize {
                    line.red().to_string()
                } else {
                    line
                }
            }
            ChangeTag::Insert => {
                let line = format!("+{}", change.value().trim_end());
                if colorize {
                    line.green().to_string()
                } else {
                    line
                }
            }
            ChangeTag::Equal => format!(" {}", change.value().trim_end()),
        };
        result.push_str(&formatted);
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use subgraph_substreams::testing::{address, address_token, block, event_log, uint_token};

    const XVS: u8 = 0xcf;

    fn governance_params() -> String {
        [
            ("governor_bravo", 0x2d),
            ("xvs_vault", 0x05),
            ("xvs", XVS),
            ("omnichain_proposal_sender", 0x36),
            ("access_control_manager", 0x47),
        ]
        .iter()
        .map(|(name, byte)| format!("{}=0x{}", name, hex::encode(address(*byte))))
        .collect::<Vec<_>>()
        .join("&")
    }

    fn transfer(from: u8, to: u8, amount: &str) -> eth::Log {
        event_log(
            &address(XVS),
            "Transfer(address,address,uint256)",
            vec![address_token(&address(from)), address_token(&address(to))],
            vec![uint_token(amount)],
        )
    }

    #[test]
    fn test_blocks_survive_base64() {
        let original = block(7, vec![transfer(0, 1, "100")]);
        let decoded = decode_block(&encode_block(&original)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_block("not base64!").is_err());
    }

    #[test]
    fn test_replay_governance_transfers() {
        let blocks = vec![
            block(1, vec![transfer(0, 1, "100"), transfer(0, 2, "100")]),
            block(2, vec![transfer(1, 2, "100")]),
        ];
        let outcome = replay(Package::Governance, &governance_params(), &blocks).unwrap();

        assert_eq!(outcome.reports.len(), 2);
        assert_eq!(outcome.reports[1].handled, 1);
        assert_eq!(outcome.failed(), 0);
        assert_eq!(outcome.snapshot["Governance"]["GOVERNANCE"]["total_token_holders"], 2);
        assert_eq!(outcome.snapshot["Governance"]["GOVERNANCE"]["current_token_holders"], 1);

        let holder = hex::encode(address(2));
        assert_eq!(outcome.snapshot["TokenHolder"][format!("0x{}", holder)]["balance_mantissa"], "200");
    }

    #[test]
    fn test_replay_rejects_bad_params() {
        let err = replay(Package::CorePool, "comptroller=0x12", &[]).unwrap_err();
        assert!(err.to_string().contains("invalid params for bnb-core-pool"));
    }

    #[test]
    fn test_run_fixture_against_expected_snapshot() {
        let dir = std::env::temp_dir().join(format!("replay-fixture-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let blocks = vec![block(1, vec![transfer(0, 1, "100")])];
        let expected = replay(Package::Governance, &governance_params(), &blocks)
            .unwrap()
            .snapshot;
        fs::write(dir.join("expected.json"), serde_json::to_string(&expected).unwrap()).unwrap();

        let fixture = format!(
            "package: governance\nparams: \"{}\"\nexpected: expected.json\nblocks:\n  - \"{}\"\n",
            governance_params(),
            encode_block(&blocks[0])
        );
        fs::write(dir.join("fixture.yaml"), fixture).unwrap();

        let (package, outcome) = run_fixture(&dir.join("fixture.yaml"), false).unwrap();
        assert_eq!(package, Package::Governance);
        assert_eq!(outcome.reports[0].handled, 1);

        fs::write(dir.join("expected.json"), "{}").unwrap();
        let err = run_fixture(&dir.join("fixture.yaml"), false).unwrap_err();
        assert!(err.to_string().contains("snapshot differs"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_diff_snapshots() {
        let expected = json!({ "Market": { "0x0b": { "supplier_count": 1 } } });
        assert!(diff_snapshots(&expected, &expected, false).unwrap().is_none());

        let actual = json!({ "Market": { "0x0b": { "supplier_count": 2 } } });
        let diff = diff_snapshots(&expected, &actual, false).unwrap().unwrap();
        assert!(diff.contains("-      \"supplier_count\": 1"));
        assert!(diff.contains("+      \"supplier_count\": 2"));
    }
}
