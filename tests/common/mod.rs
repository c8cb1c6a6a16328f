//! Mock JSON-RPC endpoint for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use alloy::primitives::{keccak256, Address, TxHash};
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

// Anvil's first account.
pub const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_ADDRESS: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";
pub const CHAIN_ID: u64 = 31337;

/// What the endpoint does once a transaction is submitted.
#[derive(Debug, Clone)]
pub enum Behavior {
    Mined,
    Reverted,
    /// Receipt stays `null`.
    NeverMined,
    /// `eth_getTransactionReceipt` requests are never answered.
    ReceiptHangs,
    /// `eth_sendRawTransaction` answers with a JSON-RPC error.
    Reject(String),
}

/// Scripted chain state behind the mock endpoint.
#[derive(Debug)]
pub struct MockChain {
    pub balance_wei: u128,
    pub behavior: Behavior,
    calls: Mutex<Vec<String>>,
    submitted: Mutex<Vec<TxHash>>,
}

impl MockChain {
    pub fn new(balance_wei: u128, behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            balance_wei,
            behavior,
            calls: Mutex::new(Vec::new()),
            submitted: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str) -> usize {
        self.calls().iter().filter(|m| m.as_str() == method).count()
    }

    pub fn submitted(&self) -> Vec<TxHash> {
        self.submitted.lock().unwrap().clone()
    }

    fn answer(&self, method: &str, params: &Value) -> Result<Value, (i64, String)> {
        match method {
            "eth_chainId" => Ok(json!(format!("0x{:x}", CHAIN_ID))),
            "eth_getBalance" => Ok(json!(format!("0x{:x}", self.balance_wei))),
            "eth_getTransactionCount" => {
                Ok(json!(format!("0x{:x}", self.submitted.lock().unwrap().len())))
            }
            "eth_gasPrice" => Ok(json!("0x3b9aca00")),
            "eth_sendRawTransaction" => {
                if let Behavior::Reject(message) = &self.behavior {
                    return Err((-32000, message.clone()));
                }
                let raw = params[0].as_str().unwrap_or_default();
                let bytes = alloy::hex::decode(raw).map_err(|e| (-32602, e.to_string()))?;
                let hash = keccak256(&bytes);
                self.submitted.lock().unwrap().push(hash);
                Ok(json!(hash.to_string()))
            }
            "eth_getTransactionReceipt" => {
                let hash = params[0].as_str().unwrap_or_default();
                match self.behavior {
                    Behavior::Mined => Ok(receipt_json(hash, true)),
                    Behavior::Reverted => Ok(receipt_json(hash, false)),
                    _ => Ok(Value::Null),
                }
            }
            other => Err((-32601, format!("method {} not found", other))),
        }
    }
}

fn receipt_json(tx_hash: &str, success: bool) -> Value {
    json!({
        "type": "0x0",
        "status": if success { "0x1" } else { "0x0" },
        "cumulativeGasUsed": "0xb3b0",
        "logs": [],
        "logsBloom": format!("0x{}", "00".repeat(256)),
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": TxHash::repeat_byte(0x11).to_string(),
        "blockNumber": "0x2a",
        "gasUsed": "0xb3b0",
        "effectiveGasPrice": "0x3b9aca00",
        "from": TEST_ADDRESS,
        "to": Address::repeat_byte(0xbf).to_string(),
        "contractAddress": null,
    })
}

async fn handle(State(chain): State<Arc<MockChain>>, Json(request): Json<Value>) -> Json<Value> {
    let method = request["method"].as_str().unwrap_or_default().to_string();
    chain.calls.lock().unwrap().push(method.clone());

    if method == "eth_getTransactionReceipt" && matches!(chain.behavior, Behavior::ReceiptHangs) {
        std::future::pending::<()>().await;
    }

    let id = request["id"].clone();
    let body = match chain.answer(&method, &request["params"]) {
        Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
        Err((code, message)) => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": code, "message": message },
        }),
    };
    Json(body)
}

/// Serve `chain` on an ephemeral local port and return the endpoint URL.
pub async fn start_mock_rpc(chain: Arc<MockChain>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let app = Router::new().route("/", post(handle)).with_state(chain);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
