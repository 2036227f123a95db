use gateway_stub::{StubGateway, error_response, ok_response};
use std::process::{Command, Output};

async fn run_cim(gateway: &StubGateway, args: &[&str]) -> Output {
    let endpoint = gateway.endpoint();
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();

    tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_cim"))
            .args(&args)
            .env("CIM_API_LOGIN_ID", "login-id")
            .env("CIM_TRANSACTION_KEY", "transaction-key")
            .env("CIM_ENDPOINT", endpoint)
            .env("NO_COLOR", "1")
            .env_remove("CIM_REF_ID")
            .env_remove("CIM_ENVIRONMENT")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run the cim binary")
    })
    .await
    .expect("The cim process panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_call_prints_response() {
    let gateway = StubGateway::start().await;
    gateway
        .respond(
            "getCustomerProfile",
            ok_response(
                "getCustomerProfile",
                "<profile><merchantCustomerId>1001</merchantCustomerId>\
                 <customerProfileId>555</customerProfileId></profile>",
            ),
        )
        .await;

    let output = run_cim(&gateway, &["call", "getCustomerProfile", "--body", "555"]).await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#""customerProfileId": "555""#));
    let envelopes = gateway.received_envelopes().await;
    assert!(envelopes[0].contains("<customerProfileId>555</customerProfileId>"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_argument_exits_without_sending() {
    let gateway = StubGateway::start().await;

    let body = r#"{"splitTenderId": 1, "splitTenderStatus": "fake"}"#;
    let output = run_cim(&gateway, &["call", "updateSplitTenderGroup", "--body", body]).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("splitTenderStatus must be either voided or completed."));
    assert!(gateway.received_envelopes().await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_remote_fault_exits_with_error() {
    let gateway = StubGateway::start().await;
    gateway
        .respond(
            "deleteCustomerProfile",
            error_response(
                "deleteCustomerProfile",
                "E00040",
                "The record cannot be found.",
            ),
        )
        .await;

    let output = run_cim(&gateway, &["call", "deleteCustomerProfile", "--body", "\"77\""]).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("E00040"));
    assert!(stderr.contains("The record cannot be found."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_operations_lists_wire_names() {
    let gateway = StubGateway::start().await;

    let output = run_cim(&gateway, &["operations"]).await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("createCustomerProfileTransaction"));
    assert!(stdout.contains("validateCustomerPaymentProfile"));
}
