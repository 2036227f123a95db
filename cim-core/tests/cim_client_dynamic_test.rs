use cim_core::{
    DynamicCallError, DynamicRequest, InvalidArgument, Operation, client::ValidationMode,
};
use recording_transport::client;
use serde_json::{Value, json};


fn request(operation: &str, body: Value) -> DynamicRequest {
    DynamicRequest {
        operation: operation.parse().expect("known operation"),
        body,
    }
}

#[tokio::test]
async fn test_create_profile_accepts_bare_customer() {
    let client = client();

    client
        .dynamic(request(
            "createCustomerProfile",
            json!({ "merchantCustomerId": 1001, "email": "a@b.com" }),
        ))
        .unwrap()
        .await
        .unwrap();
    client
        .dynamic(request(
            "createCustomerProfile",
            json!({
                "customerProfile": { "merchantCustomerId": 1001, "email": "a@b.com" },
                "validationMode": "liveMode"
            }),
        ))
        .unwrap()
        .await
        .unwrap();

    let sent = client.transport().sent();
    let body = "<merchantCustomerId>1001</merchantCustomerId><email>a@b.com</email>";
    assert_eq!(sent[0].body, body);
    assert_eq!(sent[0].validation_mode, Some(ValidationMode::None));
    assert_eq!(sent[1].body, body);
    assert_eq!(sent[1].validation_mode, Some(ValidationMode::LiveMode));
}

#[tokio::test]
async fn test_create_profile_with_unknown_validation_mode_is_sent() {
    let client = client();

    let call = client
        .dynamic(request(
            "createCustomerProfile",
            json!({ "validationMode": "x" }),
        ))
        .unwrap();
    assert_eq!(call.body(), "");
    call.await.unwrap();

    let sent = client.transport().sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].validation_mode,
        Some(ValidationMode::Other("x".to_string()))
    );
}

#[tokio::test]
async fn test_single_id_bodies() {
    let client = client();

    client
        .dynamic(request("getCustomerProfile", json!(12)))
        .unwrap()
        .await
        .unwrap();
    client
        .dynamic(request("deleteCustomerProfile", json!("13")))
        .unwrap()
        .await
        .unwrap();

    let err = client
        .dynamic(request("deleteCustomerProfile", json!(0)))
        .unwrap_err();
    assert!(matches!(
        err,
        DynamicCallError::InvalidArgument(InvalidArgument::CustomerProfileIdMissing)
    ));
    let err = client
        .dynamic(request("getCustomerProfile", json!({ "customerProfileId": 1 })))
        .unwrap_err();
    assert_eq!(err.to_string(), "You must enter in a customerProfileId.");

    let bodies: Vec<String> = client
        .transport()
        .sent()
        .into_iter()
        .map(|r| r.body)
        .collect();
    assert_eq!(
        bodies,
        vec![
            "<customerProfileId>12</customerProfileId>",
            "<customerProfileId>13</customerProfileId>",
        ]
    );
}

#[tokio::test]
async fn test_transaction_body() {
    let client = client();

    client
        .dynamic(request(
            "createCustomerProfileTransaction",
            json!({
                "transactionType": "PriorAuthCapture",
                "transaction": { "amount": 10, "transId": 111 }
            }),
        ))
        .unwrap()
        .await
        .unwrap();

    assert_eq!(
        client.transport().sent()[0].body,
        "<transaction><profileTransPriorAuthCapture><amount>10</amount>\
         <transId>111</transId></profileTransPriorAuthCapture></transaction>"
    );

    for transaction_type in ["Refund", "Void", "Sale"] {
        let err = client
            .dynamic(request(
                "createCustomerProfileTransaction",
                json!({ "transactionType": transaction_type, "transaction": {} }),
            ))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid transactionType. Must be: AuthCapture, AuthOnly, CaptureOnly, or PriorAuthCapture"
        );
    }
    assert_eq!(client.transport().sent().len(), 1);
}

#[tokio::test]
async fn test_validation_runs_on_decoded_body() {
    let client = client();

    let err = client
        .dynamic(request("updateSplitTenderGroup", Value::Null))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "You must enter in a splitTenderId and a splitTenderStatus."
    );

    let err = client
        .dynamic(request(
            "validateCustomerPaymentProfile",
            json!({ "customerProfileId": "10", "customerPaymentProfileId": 20 }),
        ))
        .unwrap_err();
    assert_eq!(err.to_string(), "You must provide a validationMode.");

    assert!(client.transport().sent().is_empty());
}

#[tokio::test]
async fn test_malformed_body() {
    let client = client();

    let err = client
        .dynamic(request(
            "validateCustomerPaymentProfile",
            json!({
                "customerProfileId": "10",
                "customerPaymentProfileId": 20,
                "validationMode": 5
            }),
        ))
        .unwrap_err();
    assert!(matches!(err, DynamicCallError::InvalidBody(_)));

    let err = client
        .dynamic(request("getCustomerShippingAddress", json!("10")))
        .unwrap_err();
    assert!(matches!(err, DynamicCallError::InvalidBody(_)));

    assert!(client.transport().sent().is_empty());
}

#[tokio::test]
async fn test_profile_ids_ignores_body() {
    let client = client();

    let call = client
        .dynamic(request("getCustomerProfileIds", json!({ "anything": true })))
        .unwrap();
    assert_eq!(call.operation(), Operation::GetCustomerProfileIds);
    assert_eq!(call.body(), "");
}

#[test]
fn test_unknown_operation_name() {
    assert!("getCustomerProfiles".parse::<Operation>().is_err());
    assert_eq!(Operation::ALL.len(), 16);
}
