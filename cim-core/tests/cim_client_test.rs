use cim_core::{
    CallError, ErrorKind, Operation,
    client::{
        CreateCustomerPaymentProfile, CreateCustomerProfile, CreateCustomerShippingAddress,
        PaymentProfileKey, ShippingAddressKey, TransactionType, UpdateCustomerPaymentProfile,
        UpdateCustomerShippingAddress, UpdateSplitTenderGroup, ValidateCustomerPaymentProfile,
        ValidationMode,
    },
    entity::{
        Address, CreditCard, Customer, CustomerBasic, Order, Payment, PaymentProfile, Scalar,
        Transaction,
    },
};
use recording_transport::{client, client_failing, client_responding};
use serde_json::json;


#[tokio::test]
async fn test_create_profile_body_and_response() {
    let client = client_responding(json!({ "customerProfileId": "555" }));

    let customer = Customer {
        merchant_customer_id: Some(Scalar::from(1001)),
        email: Some("a@b.com".to_string()),
        ..Default::default()
    };
    let response = client
        .create_customer_profile(CreateCustomerProfile {
            customer_profile: Some(customer),
            validation_mode: None,
        })
        .unwrap()
        .await
        .unwrap();

    assert_eq!(response, json!({ "customerProfileId": "555" }));

    let sent = client.transport().sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].operation, Operation::CreateCustomerProfile);
    assert_eq!(sent[0].operation.name(), "createCustomerProfile");
    assert_eq!(
        sent[0].body,
        "<merchantCustomerId>1001</merchantCustomerId><email>a@b.com</email>"
    );
    assert_eq!(sent[0].validation_mode, Some(ValidationMode::None));
}

#[tokio::test]
async fn test_create_profile_with_only_validation_mode() {
    let client = client();

    client
        .create_customer_profile(CreateCustomerProfile {
            customer_profile: None,
            validation_mode: Some(ValidationMode::TestMode),
        })
        .unwrap()
        .await
        .unwrap();

    let sent = client.transport().sent();
    assert_eq!(sent[0].body, "");
    assert_eq!(sent[0].validation_mode, Some(ValidationMode::TestMode));
}

#[tokio::test]
async fn test_create_profile_from_bare_customer() {
    let client = client();
    let customer = Customer {
        description: Some("Tom & Jerry".to_string()),
        ship_to_list: vec![Address {
            city: Some("Springfield".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    };

    client.create_customer_profile(customer).unwrap().await.unwrap();

    assert_eq!(
        client.transport().sent()[0].body,
        "<description>Tom &amp; Jerry</description>\
         <shipToList><city>Springfield</city></shipToList>"
    );
}

#[tokio::test]
async fn test_pending_call_is_lazy() {
    let client = client();

    let call = client.get_customer_profile("42").unwrap();
    assert_eq!(call.operation(), Operation::GetCustomerProfile);
    assert_eq!(call.body(), "<customerProfileId>42</customerProfileId>");
    assert!(client.transport().sent().is_empty());

    drop(call);
    assert!(client.transport().sent().is_empty());

    client.get_customer_profile(42).unwrap().await.unwrap();
    assert_eq!(client.transport().sent().len(), 1);
}

#[tokio::test]
async fn test_delete_and_get_bodies() {
    let client = client();

    client.delete_customer_profile("7").unwrap().await.unwrap();
    client.get_customer_profile_ids().unwrap().await.unwrap();
    client
        .delete_customer_payment_profile(PaymentProfileKey::new(10, 20))
        .unwrap()
        .await
        .unwrap();
    client
        .get_customer_payment_profile(PaymentProfileKey::new("10", "20"))
        .unwrap()
        .await
        .unwrap();
    client
        .delete_customer_shipping_address(ShippingAddressKey::new(10, 30))
        .unwrap()
        .await
        .unwrap();
    client
        .get_customer_shipping_address(ShippingAddressKey::new(10, 30))
        .unwrap()
        .await
        .unwrap();

    let sent: Vec<(Operation, String)> = client
        .transport()
        .sent()
        .into_iter()
        .map(|r| (r.operation, r.body))
        .collect();

    let payment_key = "<customerProfileId>10</customerProfileId>\
                       <customerPaymentProfileId>20</customerPaymentProfileId>";
    let address_key =
        "<customerProfileId>10</customerProfileId><customerAddressId>30</customerAddressId>";

    assert_eq!(
        sent,
        vec![
            (
                Operation::DeleteCustomerProfile,
                "<customerProfileId>7</customerProfileId>".to_string()
            ),
            (Operation::GetCustomerProfileIds, String::new()),
            (Operation::DeleteCustomerPaymentProfile, payment_key.to_string()),
            (Operation::GetCustomerPaymentProfile, payment_key.to_string()),
            (Operation::DeleteCustomerShippingAddress, address_key.to_string()),
            (Operation::GetCustomerShippingAddress, address_key.to_string()),
        ]
    );
    assert!(
        client
            .transport()
            .sent()
            .iter()
            .all(|r| r.validation_mode.is_none())
    );
}

#[tokio::test]
async fn test_create_payment_profile_serializes_absent_profile() {
    let client = client();

    client
        .create_customer_payment_profile(CreateCustomerPaymentProfile {
            customer_profile_id: Scalar::from(10),
            ..Default::default()
        })
        .unwrap()
        .await
        .unwrap();

    let sent = client.transport().sent();
    assert_eq!(
        sent[0].body,
        "<customerProfileId>10</customerProfileId><paymentProfile></paymentProfile>"
    );
    assert_eq!(sent[0].validation_mode, Some(ValidationMode::None));
}

#[tokio::test]
async fn test_update_payment_profile_body() {
    let client = client();
    let profile = PaymentProfile {
        customer_type: Some("individual".to_string()),
        payment: Some(Payment {
            credit_card: Some(CreditCard {
                card_number: Some(Scalar::from("4111111111111111")),
                expiration_date: Some("2030-01".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }),
        customer_payment_profile_id: Some(Scalar::from(20)),
        ..Default::default()
    };

    client
        .update_customer_payment_profile(UpdateCustomerPaymentProfile {
            customer_profile_id: Scalar::from(10),
            payment_profile: Some(profile),
            validation_mode: Some(ValidationMode::LiveMode),
        })
        .unwrap()
        .await
        .unwrap();

    let sent = client.transport().sent();
    assert_eq!(sent[0].operation, Operation::UpdateCustomerPaymentProfile);
    assert_eq!(
        sent[0].body,
        "<customerProfileId>10</customerProfileId><paymentProfile>\
         <customerType>individual</customerType><payment><creditCard>\
         <cardNumber>4111111111111111</cardNumber><expirationDate>2030-01</expirationDate>\
         </creditCard></payment><customerPaymentProfileId>20</customerPaymentProfileId>\
         </paymentProfile>"
    );
    assert_eq!(sent[0].validation_mode, Some(ValidationMode::LiveMode));
}

#[tokio::test]
async fn test_shipping_address_bodies() {
    let client = client();
    let address = Address {
        first_name: Some("Dan".to_string()),
        zip: Some(Scalar::from(123)),
        customer_address_id: Some(Scalar::from(30)),
        ..Default::default()
    };

    client
        .create_customer_shipping_address(CreateCustomerShippingAddress {
            customer_profile_id: Scalar::from("10"),
            shipping_address: None,
        })
        .unwrap()
        .await
        .unwrap();
    client
        .update_customer_shipping_address(UpdateCustomerShippingAddress {
            customer_profile_id: Scalar::from("10"),
            address: Some(address),
        })
        .unwrap()
        .await
        .unwrap();

    let sent = client.transport().sent();
    assert_eq!(
        sent[0].body,
        "<customerProfileId>10</customerProfileId><address></address>"
    );
    assert_eq!(
        sent[1].body,
        "<customerProfileId>10</customerProfileId><address><firstName>Dan</firstName>\
         <zip>123</zip><customerAddressId>30</customerAddressId></address>"
    );
}

#[tokio::test]
async fn test_update_profile_body() {
    let client = client();

    client
        .update_customer_profile(CustomerBasic {
            merchant_customer_id: Some(Scalar::from(1234)),
            email: Some("new@example.com".to_string()),
            customer_profile_id: Some(Scalar::from(123)),
            ..Default::default()
        })
        .unwrap()
        .await
        .unwrap();

    assert_eq!(
        client.transport().sent()[0].body,
        "<merchantCustomerId>1234</merchantCustomerId><email>new@example.com</email>\
         <customerProfileId>123</customerProfileId>"
    );
}

#[tokio::test]
async fn test_transaction_body_is_wrapped_by_type() {
    let client = client();
    let transaction = Transaction {
        amount: Some(Scalar::from("5.41")),
        customer_profile_id: Some(Scalar::from(5)),
        customer_payment_profile_id: Some(Scalar::from(8)),
        order: Some(Order {
            invoice_number: Some(Scalar::from(542)),
            ..Default::default()
        }),
        ..Default::default()
    };

    client
        .create_customer_profile_transaction(TransactionType::AuthCapture, transaction)
        .unwrap()
        .await
        .unwrap();

    let sent = client.transport().sent();
    assert_eq!(sent[0].operation, Operation::CreateCustomerProfileTransaction);
    assert_eq!(
        sent[0].body,
        "<transaction><profileTransAuthCapture><amount>5.41</amount>\
         <customerProfileId>5</customerProfileId>\
         <customerPaymentProfileId>8</customerPaymentProfileId>\
         <order><invoiceNumber>542</invoiceNumber></order>\
         </profileTransAuthCapture></transaction>"
    );
}

#[tokio::test]
async fn test_split_tender_statuses_reach_transport() {
    let client = client();

    for status in ["voided", "completed"] {
        client
            .update_split_tender_group(UpdateSplitTenderGroup::new(1, status))
            .unwrap()
            .await
            .unwrap();
    }

    let bodies: Vec<String> = client
        .transport()
        .sent()
        .into_iter()
        .map(|r| r.body)
        .collect();
    assert_eq!(
        bodies,
        vec![
            "<splitTenderId>1</splitTenderId><splitTenderStatus>voided</splitTenderStatus>",
            "<splitTenderId>1</splitTenderId><splitTenderStatus>completed</splitTenderStatus>",
        ]
    );
}

#[tokio::test]
async fn test_validate_includes_optional_fields_only_when_present() {
    let client = client();
    let base = ValidateCustomerPaymentProfile {
        customer_profile_id: Scalar::from(10),
        customer_payment_profile_id: Scalar::from(20),
        validation_mode: Some(ValidationMode::TestMode),
        ..Default::default()
    };

    client
        .validate_customer_payment_profile(base.clone())
        .unwrap()
        .await
        .unwrap();
    client
        .validate_customer_payment_profile(ValidateCustomerPaymentProfile {
            customer_shipping_address_id: Some(Scalar::from(30)),
            card_code: Some(Scalar::from("123")),
            ..base.clone()
        })
        .unwrap()
        .await
        .unwrap();
    client
        .validate_customer_payment_profile(ValidateCustomerPaymentProfile {
            customer_shipping_address_id: Some(Scalar::from("")),
            card_code: Some(Scalar::from(999)),
            ..base
        })
        .unwrap()
        .await
        .unwrap();

    let sent = client.transport().sent();
    let ids = "<customerProfileId>10</customerProfileId>\
               <customerPaymentProfileId>20</customerPaymentProfileId>";
    assert_eq!(sent[0].body, ids);
    assert_eq!(
        sent[1].body,
        format!(
            "{ids}<customerShippingAddressId>30</customerShippingAddressId>\
             <cardCode>123</cardCode>"
        )
    );
    assert_eq!(sent[2].body, format!("{ids}<cardCode>999</cardCode>"));
    assert!(
        sent.iter()
            .all(|r| r.validation_mode == Some(ValidationMode::TestMode))
    );
}

#[tokio::test]
async fn test_ref_id_follows_client_state() {
    let mut client = client();

    client.get_customer_profile_ids().unwrap().await.unwrap();
    client.set_ref_id("order-77");
    client.get_customer_profile_ids().unwrap().await.unwrap();
    client.clear_ref_id();
    client.get_customer_profile_ids().unwrap().await.unwrap();

    let ref_ids: Vec<Option<String>> = client
        .transport()
        .sent()
        .into_iter()
        .map(|r| r.ref_id)
        .collect();
    assert_eq!(ref_ids, vec![None, Some("order-77".to_string()), None]);
}

#[tokio::test]
async fn test_remote_fault_is_delivered_on_completion() {
    let client = client_failing(CallError::remote("E00040", "The record cannot be found."));

    // Validation passes, the failure only shows up once awaited.
    let call = client.get_customer_profile(99).unwrap();
    let err = call.await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RemoteFault);
    assert_eq!(err.code(), "E00040");
    assert_eq!(err.text(), "The record cannot be found.");
    assert_eq!(client.transport().sent().len(), 1);
}

#[tokio::test]
async fn test_both_phases_chain_with_question_mark() {
    async fn run() -> Result<serde_json::Value, cim_core::Error> {
        let client = client_responding(json!({ "ids": { "numericString": ["1", "2"] } }));
        Ok(client.get_customer_profile_ids()?.await?)
    }

    assert_eq!(
        run().await.unwrap()["ids"]["numericString"],
        json!(["1", "2"])
    );
}
