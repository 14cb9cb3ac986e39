use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

/// How a withdrawal would be paid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WithdrawMethod {
    Card,
    PayPal,
    BankTransfer,
    Crypto { network: String, address: String },
}

impl std::fmt::Display for WithdrawMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WithdrawMethod::Card => write!(f, "card"),
            WithdrawMethod::PayPal => write!(f, "paypal"),
            WithdrawMethod::BankTransfer => write!(f, "bank"),
            WithdrawMethod::Crypto { network, .. } => write!(f, "crypto ({network})"),
        }
    }
}

/// Acknowledgement of a simulated withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalReceipt {
    pub reference: Uuid,
    pub amount: Decimal,
    pub method: WithdrawMethod,
    pub message: String,
}

/// Where to send a simulated deposit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositInstructions {
    pub reference: Uuid,
    pub symbol: String,
    pub network: String,
    pub address: String,
}

/// A depositable asset and the networks it can arrive on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositAsset {
    pub symbol: &'static str,
    pub name: &'static str,
    pub networks: &'static [&'static str],
}

pub const DEPOSIT_ASSETS: &[DepositAsset] = &[
    DepositAsset {
        symbol: "BTC",
        name: "Bitcoin",
        networks: &["BTC", "ERC-20", "BEP-20"],
    },
    DepositAsset {
        symbol: "ETH",
        name: "Ethereum",
        networks: &["ERC-20", "BEP-20"],
    },
    DepositAsset {
        symbol: "USDT",
        name: "USDT",
        networks: &["ERC-20", "TRC-20", "BEP-20"],
    },
];

/// Simulated deposit/withdraw flows.
///
/// Nothing here moves coins: requests are validated and acknowledged, and
/// the ledger balance is left untouched. No store writes.
#[derive(Debug, Default)]
pub struct WalletService;

impl WalletService {
    pub fn new() -> Self {
        Self
    }

    pub fn withdraw(
        &self,
        amount: Decimal,
        method: WithdrawMethod,
    ) -> Result<WithdrawalReceipt, CoreError> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::ValidationError(
                "Please enter an amount to withdraw".into(),
            ));
        }
        if let WithdrawMethod::Crypto { network, address } = &method {
            if network.trim().is_empty() {
                return Err(CoreError::ValidationError(
                    "Withdrawal network is required".into(),
                ));
            }
            if address.trim().is_empty() {
                return Err(CoreError::ValidationError(
                    "Destination address is required".into(),
                ));
            }
        }

        let receipt = WithdrawalReceipt {
            reference: Uuid::new_v4(),
            amount,
            message: format!(
                "Your withdrawal of {amount} DD Coins via {method} has been initiated. This is a demo."
            ),
            method,
        };
        tracing::info!(
            reference = %receipt.reference,
            %amount,
            "simulated withdrawal acknowledged"
        );
        Ok(receipt)
    }

    pub fn deposit(&self, symbol: &str, network: &str) -> Result<DepositInstructions, CoreError> {
        let symbol = symbol.trim().to_uppercase();
        let asset = DEPOSIT_ASSETS
            .iter()
            .find(|a| a.symbol == symbol)
            .ok_or_else(|| {
                CoreError::ValidationError(format!("Unsupported deposit asset: {symbol}"))
            })?;

        let network = network.trim().to_uppercase();
        if !asset.networks.iter().any(|n| *n == network) {
            return Err(CoreError::ValidationError(format!(
                "{symbol} cannot be deposited over {network} (supported: {})",
                asset.networks.join(", ")
            )));
        }

        let reference = Uuid::new_v4();
        Ok(DepositInstructions {
            address: mock_address(&network, reference),
            reference,
            symbol,
            network,
        })
    }
}

/// Demo address shaped like the network's real ones.
fn mock_address(network: &str, reference: Uuid) -> String {
    let hex = reference.simple().to_string();
    match network {
        "BTC" => format!("bc1q{}", &hex[..30]),
        "TRC-20" => format!("T{}", &hex[..32]),
        _ => format!("0x{}{}", hex, &hex[..8]),
    }
}
