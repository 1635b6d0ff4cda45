//! In-process mock of the trainer backend.
//!
//! Serves the same surface the real backend exposes (HAL customer
//! collection, flat `/gettrainings`, HAL `/trainings`, per-training
//! customer relation, `/reset`) on a random local port, with a request
//! log so tests can assert which calls were (or were not) issued.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use trainer_client::ApiConfig;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerFields {
    pub firstname: String,
    pub lastname: String,
    pub streetaddress: String,
    pub postcode: String,
    pub city: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingFields {
    pub date: String,
    pub duration: i64,
    pub activity: String,
    pub customer: String,
}

#[derive(Clone, Debug)]
struct StoredCustomer {
    id: i64,
    fields: CustomerFields,
}

#[derive(Clone, Debug)]
struct StoredTraining {
    id: i64,
    fields: TrainingFields,
}

struct Store {
    base_url: String,
    customers: Vec<StoredCustomer>,
    trainings: Vec<StoredTraining>,
    next_id: i64,
    requests: Vec<String>,
}

impl Store {
    fn customer_hal(&self, customer: &StoredCustomer) -> Value {
        let address = format!("{}/customers/{}", self.base_url, customer.id);
        let mut doc = serde_json::to_value(&customer.fields).unwrap();
        doc["_links"] = json!({
            "self": { "href": address.as_str() },
            "customer": { "href": address.as_str() },
            "trainings": { "href": format!("{address}/trainings") },
        });
        doc
    }

    fn training_hal(&self, training: &StoredTraining) -> Value {
        let address = format!("{}/trainings/{}", self.base_url, training.id);
        json!({
            "date": training.fields.date,
            "duration": training.fields.duration,
            "activity": training.fields.activity,
            "_links": {
                "self": { "href": address.as_str() },
                "training": { "href": address.as_str() },
                "customer": { "href": format!("{address}/customer") },
            }
        })
    }

    fn customer_for_training(&self, training: &StoredTraining) -> Option<&StoredCustomer> {
        let id: i64 = training
            .fields
            .customer
            .trim_end_matches('/')
            .rsplit('/')
            .next()?
            .parse()
            .ok()?;
        self.customers.iter().find(|c| c.id == id)
    }
}

type Shared = Arc<Mutex<Store>>;

#[derive(Clone)]
pub struct MockBackend {
    pub base_url: String,
    state: Shared,
}

impl MockBackend {
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{addr}/api");

        let state: Shared = Arc::new(Mutex::new(Store {
            base_url: base_url.clone(),
            customers: Vec::new(),
            trainings: Vec::new(),
            next_id: 1,
            requests: Vec::new(),
        }));

        let api = Router::new()
            .route("/customers", get(list_customers).post(create_customer))
            .route(
                "/customers/:id",
                get(get_customer).put(update_customer).delete(delete_customer),
            )
            .route("/gettrainings", get(list_trainings_flat))
            .route("/trainings", get(list_trainings_hal).post(create_training))
            .route(
                "/trainings/:id",
                get(get_training).put(update_training).delete(delete_training),
            )
            .route("/trainings/:id/customer", get(training_customer))
            .route("/reset", post(reset));

        let app = Router::new()
            .nest("/api", api)
            .layer(middleware::from_fn_with_state(state.clone(), track_request))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, state }
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig::new(&self.base_url).unwrap()
    }

    pub fn seed_customer(&self, fields: CustomerFields) -> i64 {
        let mut store = self.state.lock().unwrap();
        let id = store.next_id;
        store.next_id += 1;
        store.customers.push(StoredCustomer { id, fields });
        id
    }

    pub fn seed_training(&self, fields: TrainingFields) -> i64 {
        let mut store = self.state.lock().unwrap();
        let id = store.next_id;
        store.next_id += 1;
        store.trainings.push(StoredTraining { id, fields });
        id
    }

    pub fn customer_count(&self) -> usize {
        self.state.lock().unwrap().customers.len()
    }

    pub fn training_count(&self) -> usize {
        self.state.lock().unwrap().trainings.len()
    }

    pub fn customer_fields(&self, id: i64) -> Option<CustomerFields> {
        let store = self.state.lock().unwrap();
        store
            .customers
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.fields.clone())
    }

    pub fn training_fields(&self, id: i64) -> Option<TrainingFields> {
        let store = self.state.lock().unwrap();
        store
            .trainings
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.fields.clone())
    }

    pub fn clear_customers(&self) {
        self.state.lock().unwrap().customers.clear();
    }

    pub fn last_training(&self) -> Option<(i64, TrainingFields)> {
        let store = self.state.lock().unwrap();
        store
            .trainings
            .last()
            .map(|t| (t.id, t.fields.clone()))
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub fn requests_matching(&self, needle: &str) -> usize {
        let store = self.state.lock().unwrap();
        store.requests.iter().filter(|r| r.contains(needle)).count()
    }
}

/// The dataset `POST /reset` restores.
pub fn default_customers() -> Vec<CustomerFields> {
    vec![
        CustomerFields {
            firstname: "Aija".into(),
            lastname: "Kuusisto".into(),
            streetaddress: "Mannerheimintie 1".into(),
            postcode: "00100".into(),
            city: "Helsinki".into(),
            email: "aija@example.com".into(),
            phone: "040-1234567".into(),
        },
        CustomerFields {
            firstname: "Bo".into(),
            lastname: "Nieminen".into(),
            streetaddress: "Aleksanterinkatu 5".into(),
            postcode: "00120".into(),
            city: "Helsinki".into(),
            email: "bo@example.com".into(),
            phone: "040-7654321".into(),
        },
    ]
}

async fn track_request(State(state): State<Shared>, request: Request, next: Next) -> Response {
    {
        let mut store = state.lock().unwrap();
        let line = format!("{} {}", request.method(), request.uri().path());
        store.requests.push(line);
    }
    next.run(request).await
}

async fn list_customers(State(state): State<Shared>) -> Json<Value> {
    let store = state.lock().unwrap();
    let items: Vec<Value> = store
        .customers
        .iter()
        .map(|c| store.customer_hal(c))
        .collect();
    Json(json!({ "_embedded": { "customers": items } }))
}

async fn get_customer(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let store = state.lock().unwrap();
    match store.customers.iter().find(|c| c.id == id) {
        Some(customer) => Json(store.customer_hal(customer)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create_customer(
    State(state): State<Shared>,
    Json(fields): Json<CustomerFields>,
) -> StatusCode {
    let mut store = state.lock().unwrap();
    let id = store.next_id;
    store.next_id += 1;
    store.customers.push(StoredCustomer { id, fields });
    StatusCode::CREATED
}

async fn update_customer(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(fields): Json<CustomerFields>,
) -> StatusCode {
    let mut store = state.lock().unwrap();
    match store.customers.iter_mut().find(|c| c.id == id) {
        Some(customer) => {
            customer.fields = fields;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_customer(State(state): State<Shared>, Path(id): Path<i64>) -> StatusCode {
    let mut store = state.lock().unwrap();
    let before = store.customers.len();
    store.customers.retain(|c| c.id != id);
    if store.customers.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn list_trainings_flat(State(state): State<Shared>) -> Json<Value> {
    let store = state.lock().unwrap();
    let items: Vec<Value> = store
        .trainings
        .iter()
        .map(|t| {
            let customer = store
                .customer_for_training(t)
                .map(|c| {
                    let mut doc = serde_json::to_value(&c.fields).unwrap();
                    doc["id"] = json!(c.id);
                    doc
                })
                .unwrap_or(Value::Null);
            json!({
                "id": t.id,
                "date": t.fields.date,
                "duration": t.fields.duration,
                "activity": t.fields.activity,
                "customer": customer,
            })
        })
        .collect();
    Json(Value::Array(items))
}

async fn list_trainings_hal(State(state): State<Shared>) -> Json<Value> {
    let store = state.lock().unwrap();
    let items: Vec<Value> = store
        .trainings
        .iter()
        .map(|t| store.training_hal(t))
        .collect();
    Json(json!({ "_embedded": { "trainings": items } }))
}

async fn get_training(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let store = state.lock().unwrap();
    match store.trainings.iter().find(|t| t.id == id) {
        Some(training) => Json(store.training_hal(training)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// The backend contract under test: a training body whose `customer` is not
/// a full address is rejected.
fn validate_training(fields: &TrainingFields) -> Result<(), StatusCode> {
    if !fields.customer.starts_with("http://") && !fields.customer.starts_with("https://") {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(())
}

async fn create_training(
    State(state): State<Shared>,
    Json(fields): Json<TrainingFields>,
) -> StatusCode {
    if let Err(status) = validate_training(&fields) {
        return status;
    }
    let mut store = state.lock().unwrap();
    let id = store.next_id;
    store.next_id += 1;
    store.trainings.push(StoredTraining { id, fields });
    StatusCode::CREATED
}

async fn update_training(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(fields): Json<TrainingFields>,
) -> StatusCode {
    if let Err(status) = validate_training(&fields) {
        return status;
    }
    let mut store = state.lock().unwrap();
    match store.trainings.iter_mut().find(|t| t.id == id) {
        Some(training) => {
            training.fields = fields;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_training(State(state): State<Shared>, Path(id): Path<i64>) -> StatusCode {
    let mut store = state.lock().unwrap();
    let before = store.trainings.len();
    store.trainings.retain(|t| t.id != id);
    if store.trainings.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn training_customer(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let store = state.lock().unwrap();
    let training = match store.trainings.iter().find(|t| t.id == id) {
        Some(training) => training,
        None => return StatusCode::NOT_FOUND.into_response(),
    };
    match store.customer_for_training(training) {
        Some(customer) => Json(store.customer_hal(customer)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn reset(State(state): State<Shared>) -> StatusCode {
    let mut store = state.lock().unwrap();
    store.customers.clear();
    store.trainings.clear();
    store.next_id = 1;

    for fields in default_customers() {
        let id = store.next_id;
        store.next_id += 1;
        store.customers.push(StoredCustomer { id, fields });
    }

    let base = store.base_url.clone();
    let seeded: Vec<TrainingFields> = vec![
        TrainingFields {
            date: "2024-01-01T10:00:00.000+00:00".into(),
            duration: 60,
            activity: "Yoga".into(),
            customer: format!("{base}/customers/1"),
        },
        TrainingFields {
            date: "2024-01-02T11:00:00.000+00:00".into(),
            duration: 30,
            activity: "Spinning".into(),
            customer: format!("{base}/customers/2"),
        },
    ];
    for fields in seeded {
        let id = store.next_id;
        store.next_id += 1;
        store.trainings.push(StoredTraining { id, fields });
    }

    StatusCode::OK
}
