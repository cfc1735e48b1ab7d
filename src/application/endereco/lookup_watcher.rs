use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use uuid::Uuid;
use crate::domain::endereco::cep_lookup_interface::CepLookupInterface;
use crate::domain::endereco::form::{FormModel, CEP_LENGTH};

/// Follows the CEP field of one form for the lifetime of its session.
///
/// Each observed transition either starts a lookup (exactly 8 characters) or
/// does nothing. A newer transition while a lookup is in flight cancels it and
/// processing restarts from the newest value, so the last write always wins.
/// The task ends when the form is closed and its sender side is dropped.
pub async fn run(
    mut cep_rx: watch::Receiver<String>,
    model: Arc<Mutex<FormModel>>,
    lookup_client: Arc<dyn CepLookupInterface>,
    form_id: Uuid,
) {
    let mut superseded = false;
    loop {
        if !superseded && cep_rx.changed().await.is_err() {
            break;
        }
        superseded = false;

        let cep = cep_rx.borrow_and_update().clone();
        if cep.chars().count() != CEP_LENGTH {
            continue;
        }

        log::info!("Form {form_id}: looking up CEP {cep}");
        tokio::select! {
            biased;
            changed = cep_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                log::info!("Form {form_id}: CEP changed while lookup was in flight, cancelling");
                superseded = true;
            },
            result = lookup_client.lookup_cep(&cep) => {
                match result {
                    Ok(endereco) => {
                        model.lock().await.apply_lookup(&endereco);
                        log::info!("Form {form_id}: CEP {cep} resolved");
                    },
                    Err(err) => {
                        // The form keeps its previous values on a failed lookup.
                        log::warn!("Form {form_id}: CEP {cep} lookup failed: {err:?}");
                    },
                }
            },
        }
    }
}
