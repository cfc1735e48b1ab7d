mod common;

use cadastro_backend::application::endereco::form_service::EnderecoFormService;
use cadastro_backend::application::endereco::form_service_interface::EnderecoFormServiceInterface;
use cadastro_backend::domain::endereco::form::FormField;
use cadastro_backend::domain::endereco::lookup::EnderecoLookup;
use cadastro_backend::presentation::endereco::endereco::UpdateFieldRequest;
use common::helpers::{sample_lookup, wait_for_condition, CannedLookup, MockCepLookup};
use std::sync::Arc;
use std::time::Duration;

fn update(field: FormField, value: &str) -> UpdateFieldRequest {
    UpdateFieldRequest {
        field,
        value: value.to_string(),
    }
}

#[tokio::test]
async fn incomplete_cep_never_triggers_a_lookup() {
    let mock = Arc::new(MockCepLookup::new().with_response("01310100", sample_lookup()));
    let service = EnderecoFormService::new(mock.clone());
    let form = service.create_form().await.unwrap();

    // 1, 7 and 9 characters: none of them reach the lookup gate
    for value in ["0", "0131010", "01310-100"] {
        service
            .update_field(form.form_id, update(FormField::Cep, value))
            .await
            .unwrap();
    }

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn complete_cep_triggers_exactly_one_lookup_and_fills_the_address() {
    let mock = Arc::new(MockCepLookup::new().with_response("01310100", sample_lookup()));
    let service = EnderecoFormService::new(mock.clone());
    let form = service.create_form().await.unwrap();

    service
        .update_field(form.form_id, update(FormField::Cep, "01310100"))
        .await
        .unwrap();

    let filled = wait_for_condition(
        || {
            let service = &service;
            let form_id = form.form_id;
            async move {
                let snapshot = service.get_form(form_id).await.unwrap();
                snapshot.endereco.rua == "Avenida Paulista"
            }
        },
        50,
    )
    .await;
    assert!(filled);

    let snapshot = service.get_form(form.form_id).await.unwrap();
    assert_eq!(snapshot.endereco.bairro, "Bela Vista");
    assert_eq!(snapshot.endereco.localidade, "São Paulo, SP");
    assert_eq!(mock.calls(), vec!["01310100".to_string()]);
}

#[tokio::test]
async fn resending_an_identical_cep_does_not_trigger_another_lookup() {
    let mock = Arc::new(MockCepLookup::new().with_response("01310100", sample_lookup()));
    let service = EnderecoFormService::new(mock.clone());
    let form = service.create_form().await.unwrap();

    service
        .update_field(form.form_id, update(FormField::Cep, "01310100"))
        .await
        .unwrap();
    let first = wait_for_condition(
        || {
            let mock = &mock;
            async move { mock.calls().len() == 1 }
        },
        50,
    )
    .await;
    assert!(first);

    service
        .update_field(form.form_id, update(FormField::Cep, "01310100"))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(mock.calls().len(), 1);
}

#[tokio::test]
async fn reentering_the_same_cep_after_edits_triggers_a_new_lookup() {
    let mock = Arc::new(MockCepLookup::new().with_response("01310100", sample_lookup()));
    let service = EnderecoFormService::new(mock.clone());
    let form = service.create_form().await.unwrap();

    service
        .update_field(form.form_id, update(FormField::Cep, "01310100"))
        .await
        .unwrap();
    let first = wait_for_condition(
        || {
            let mock = &mock;
            async move { mock.calls().len() == 1 }
        },
        50,
    )
    .await;
    assert!(first);

    // Backspace one character, then type it again
    service
        .update_field(form.form_id, update(FormField::Cep, "0131010"))
        .await
        .unwrap();
    service
        .update_field(form.form_id, update(FormField::Cep, "01310100"))
        .await
        .unwrap();

    let second = wait_for_condition(
        || {
            let mock = &mock;
            async move { mock.calls().len() == 2 }
        },
        50,
    )
    .await;
    assert!(second);
}

#[tokio::test]
async fn failed_lookup_leaves_previous_values_unchanged() {
    let mock = Arc::new(
        MockCepLookup::new()
            .with_response("01310100", sample_lookup())
            .with_canned(
                "99999999",
                CannedLookup {
                    delay: Duration::ZERO,
                    result: Err("ViaCEP response did not match the expected shape".to_string()),
                },
            ),
    );
    let service = EnderecoFormService::new(mock.clone());
    let form = service.create_form().await.unwrap();

    service
        .update_field(form.form_id, update(FormField::Cep, "01310100"))
        .await
        .unwrap();
    let filled = wait_for_condition(
        || {
            let service = &service;
            let form_id = form.form_id;
            async move {
                let snapshot = service.get_form(form_id).await.unwrap();
                snapshot.endereco.rua == "Avenida Paulista"
            }
        },
        50,
    )
    .await;
    assert!(filled);

    service
        .update_field(form.form_id, update(FormField::Cep, "99999999"))
        .await
        .unwrap();
    let looked_up = wait_for_condition(
        || {
            let mock = &mock;
            async move { mock.calls().len() == 2 }
        },
        50,
    )
    .await;
    assert!(looked_up);

    tokio::time::sleep(Duration::from_millis(100)).await;
    let snapshot = service.get_form(form.form_id).await.unwrap();
    assert_eq!(snapshot.endereco.cep, "99999999");
    assert_eq!(snapshot.endereco.rua, "Avenida Paulista");
    assert_eq!(snapshot.endereco.bairro, "Bela Vista");
    assert_eq!(snapshot.endereco.localidade, "São Paulo, SP");
}

#[tokio::test]
async fn newer_cep_cancels_the_inflight_lookup() {
    let slow = EnderecoLookup {
        logradouro: "Rua Antiga".to_string(),
        bairro: "Centro".to_string(),
        localidade: "Campinas".to_string(),
        uf: "SP".to_string(),
    };
    let mock = Arc::new(
        MockCepLookup::new()
            .with_canned(
                "11111111",
                CannedLookup {
                    delay: Duration::from_millis(400),
                    result: Ok(slow),
                },
            )
            .with_response("01310100", sample_lookup()),
    );
    let service = EnderecoFormService::new(mock.clone());
    let form = service.create_form().await.unwrap();

    service
        .update_field(form.form_id, update(FormField::Cep, "11111111"))
        .await
        .unwrap();
    let in_flight = wait_for_condition(
        || {
            let mock = &mock;
            async move { mock.calls().len() == 1 }
        },
        50,
    )
    .await;
    assert!(in_flight);

    service
        .update_field(form.form_id, update(FormField::Cep, "01310100"))
        .await
        .unwrap();

    let filled = wait_for_condition(
        || {
            let service = &service;
            let form_id = form.form_id;
            async move {
                let snapshot = service.get_form(form_id).await.unwrap();
                snapshot.endereco.rua == "Avenida Paulista"
            }
        },
        50,
    )
    .await;
    assert!(filled);

    // The superseded lookup must never apply, even after its delay elapses
    tokio::time::sleep(Duration::from_millis(500)).await;
    let snapshot = service.get_form(form.form_id).await.unwrap();
    assert_eq!(snapshot.endereco.rua, "Avenida Paulista");
    assert_eq!(snapshot.endereco.bairro, "Bela Vista");
    assert_eq!(snapshot.endereco.localidade, "São Paulo, SP");
}
