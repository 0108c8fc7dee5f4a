//! In-process stand-in for the payroll backend.
//!
//! Serves the backend's REST routes from an actix-web server on an ephemeral
//! port, counts requests per route, and can be told to fail a route.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

use crate::model::{BankAccount, Batch, BatchName, Employee, NewEmployee};

pub struct MockState {
    pub batches: Vec<Batch>,
    pub employees: Vec<Employee>,
    pub accounts: Vec<BankAccount>,
    next_batch_id: u64,
    next_employee_id: u64,
    hits: HashMap<&'static str, usize>,
    failures: HashMap<&'static str, (u16, String)>,
    empty_replies: HashSet<&'static str>,
    last_payment: Option<Value>,
    last_upload_multipart: bool,
}

pub fn employee(id: u64, name: &str, salary: f64, batch_id: Option<u64>) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        salary_amount: salary,
        bank_details: format!("HDFC0001234 / 5010{id:08}"),
        payment_ref: Some("OCT-SAL".to_string()),
        your_ref: None,
        notes: None,
        batch_id,
    }
}

impl MockState {
    /// Batch 5 with employees 11 and 12; employee 13 unassigned; two accounts.
    fn seeded() -> Self {
        Self {
            batches: vec![Batch {
                id: 5,
                name: "Q3 Engineering".to_string(),
                status: Some("PENDING".to_string()),
            }],
            employees: vec![
                employee(11, "Asha Rao", 85_000.0, Some(5)),
                employee(12, "Ravi Kumar", 62_500.5, Some(5)),
                employee(13, "Meera Iyer", 48_000.0, None),
            ],
            accounts: vec![
                BankAccount {
                    id: 1,
                    number: "001-223344-55".to_string(),
                    balance: 2_500_000.0,
                },
                BankAccount {
                    id: 2,
                    number: "001-998877-66".to_string(),
                    balance: 10_000.0,
                },
            ],
            next_batch_id: 6,
            next_employee_id: 14,
            hits: HashMap::new(),
            failures: HashMap::new(),
            empty_replies: HashSet::new(),
            last_payment: None,
            last_upload_multipart: false,
        }
    }

    /// Count the hit and short-circuit with an injected reply, if any.
    fn enter(&mut self, route: &'static str) -> Option<HttpResponse> {
        *self.hits.entry(route).or_default() += 1;
        if let Some((status, body)) = self.failures.get(route) {
            let status = StatusCode::from_u16(*status).unwrap();
            return Some(HttpResponse::build(status).body(body.clone()));
        }
        if self.empty_replies.contains(route) {
            return Some(HttpResponse::Ok().finish());
        }
        None
    }
}

type Shared = web::Data<Mutex<MockState>>;

pub struct MockBackend {
    pub url: String,
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(MockState::seeded()));
        let data: Shared = web::Data::from(state.clone());

        let server = HttpServer::new(move || {
            App::new().app_data(data.clone()).service(
                web::scope("/api")
                    .service(
                        web::resource("/batches")
                            .route(web::get().to(list_batches))
                            .route(web::post().to(create_batch)),
                    )
                    .service(
                        web::resource("/batches/{id}")
                            .route(web::put().to(rename_batch))
                            .route(web::delete().to(delete_batch)),
                    )
                    .service(
                        web::resource("/batches/{id}/initiate-payment")
                            .route(web::post().to(initiate_payment)),
                    )
                    .service(
                        web::resource("/employees")
                            .route(web::get().to(list_employees))
                            .route(web::post().to(add_employee)),
                    )
                    .service(
                        web::resource("/employees/bulk-upload").route(web::post().to(bulk_upload)),
                    )
                    .service(web::resource("/employees/{id}").route(web::delete().to(delete_employee)))
                    .service(
                        web::resource("/employees/{id}/assign/{batch_id}")
                            .route(web::put().to(assign_employee)),
                    )
                    .service(
                        web::resource("/employees/{id}/unassign")
                            .route(web::put().to(unassign_employee)),
                    )
                    .service(web::resource("/bank-accounts").route(web::get().to(list_bank_accounts))),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            url: format!("http://{addr}/api"),
            state,
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    pub fn hits(&self, route: &str) -> usize {
        self.with(|s| s.hits.get(route).copied().unwrap_or(0))
    }

    pub fn total_hits(&self) -> usize {
        self.with(|s| s.hits.values().sum())
    }

    pub fn fail(&self, route: &'static str, status: u16, body: &str) {
        self.with(|s| s.failures.insert(route, (status, body.to_string())));
    }

    pub fn clear_failures(&self) {
        self.with(|s| s.failures.clear());
    }

    /// Answer `200 OK` with no body.
    pub fn reply_empty(&self, route: &'static str) {
        self.with(|s| s.empty_replies.insert(route));
    }

    pub fn last_payment(&self) -> Option<Value> {
        self.with(|s| s.last_payment.clone())
    }

    pub fn last_upload_was_multipart(&self) -> bool {
        self.with(|s| s.last_upload_multipart)
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.with(|s| s.employees.clone())
    }

    pub fn batches(&self) -> Vec<Batch> {
        self.with(|s| s.batches.clone())
    }
}

async fn list_batches(state: Shared) -> HttpResponse {
    let mut s = state.lock().unwrap();
    if let Some(resp) = s.enter("list_batches") {
        return resp;
    }
    HttpResponse::Ok().json(&s.batches)
}

async fn create_batch(state: Shared, body: web::Json<BatchName>) -> HttpResponse {
    let mut s = state.lock().unwrap();
    if let Some(resp) = s.enter("create_batch") {
        return resp;
    }
    let batch = Batch {
        id: s.next_batch_id,
        name: body.into_inner().name,
        status: Some("PENDING".to_string()),
    };
    s.next_batch_id += 1;
    s.batches.push(batch.clone());
    HttpResponse::Created().json(batch)
}

async fn rename_batch(
    state: Shared,
    path: web::Path<u64>,
    body: web::Json<BatchName>,
) -> HttpResponse {
    let mut s = state.lock().unwrap();
    if let Some(resp) = s.enter("rename_batch") {
        return resp;
    }
    let id = path.into_inner();
    match s.batches.iter_mut().find(|b| b.id == id) {
        Some(batch) => {
            batch.name = body.into_inner().name;
            HttpResponse::Ok().json(batch.clone())
        }
        None => HttpResponse::NotFound().body(format!("Batch not found with id: {id}")),
    }
}

async fn delete_batch(state: Shared, path: web::Path<u64>) -> HttpResponse {
    let mut s = state.lock().unwrap();
    if let Some(resp) = s.enter("delete_batch") {
        return resp;
    }
    let id = path.into_inner();
    s.batches.retain(|b| b.id != id);
    for employee in s.employees.iter_mut().filter(|e| e.batch_id == Some(id)) {
        employee.batch_id = None;
    }
    HttpResponse::NoContent().finish()
}

async fn initiate_payment(
    state: Shared,
    path: web::Path<u64>,
    body: web::Json<Value>,
) -> HttpResponse {
    let mut s = state.lock().unwrap();
    if let Some(resp) = s.enter("initiate_payment") {
        return resp;
    }
    let id = path.into_inner();
    s.last_payment = Some(body.into_inner());
    match s.batches.iter_mut().find(|b| b.id == id) {
        Some(batch) => {
            batch.status = Some("PAYMENT_INITIATED".to_string());
            HttpResponse::Ok().json(batch.clone())
        }
        None => HttpResponse::NotFound().body(format!("Batch not found with id: {id}")),
    }
}

async fn list_employees(state: Shared) -> HttpResponse {
    let mut s = state.lock().unwrap();
    if let Some(resp) = s.enter("list_employees") {
        return resp;
    }
    HttpResponse::Ok().json(&s.employees)
}

async fn add_employee(state: Shared, body: web::Json<NewEmployee>) -> HttpResponse {
    let mut s = state.lock().unwrap();
    if let Some(resp) = s.enter("add_employee") {
        return resp;
    }
    let new = body.into_inner();
    let created = Employee {
        id: s.next_employee_id,
        name: new.name,
        salary_amount: new.salary_amount,
        bank_details: new.bank_details,
        payment_ref: new.payment_ref,
        your_ref: new.your_ref,
        notes: new.notes,
        batch_id: new.batch_id,
    };
    s.next_employee_id += 1;
    s.employees.push(created.clone());
    HttpResponse::Created().json(created)
}

async fn delete_employee(state: Shared, path: web::Path<u64>) -> HttpResponse {
    let mut s = state.lock().unwrap();
    if let Some(resp) = s.enter("delete_employee") {
        return resp;
    }
    let id = path.into_inner();
    s.employees.retain(|e| e.id != id);
    HttpResponse::NoContent().finish()
}

async fn assign_employee(state: Shared, path: web::Path<(u64, u64)>) -> HttpResponse {
    let mut s = state.lock().unwrap();
    if let Some(resp) = s.enter("assign_employee") {
        return resp;
    }
    let (id, batch_id) = path.into_inner();
    match s.employees.iter_mut().find(|e| e.id == id) {
        Some(employee) => {
            employee.batch_id = Some(batch_id);
            HttpResponse::Ok().json(employee.clone())
        }
        None => HttpResponse::NotFound().body(format!("Employee not found with id: {id}")),
    }
}

async fn unassign_employee(state: Shared, path: web::Path<u64>) -> HttpResponse {
    let mut s = state.lock().unwrap();
    if let Some(resp) = s.enter("unassign_employee") {
        return resp;
    }
    let id = path.into_inner();
    match s.employees.iter_mut().find(|e| e.id == id) {
        Some(employee) => {
            employee.batch_id = None;
            HttpResponse::Ok().json(employee.clone())
        }
        None => HttpResponse::NotFound().body(format!("Employee not found with id: {id}")),
    }
}

/// Creates one batch holding one employee, like a one-row spreadsheet.
async fn bulk_upload(state: Shared, req: HttpRequest, _body: web::Bytes) -> HttpResponse {
    let mut s = state.lock().unwrap();
    if let Some(resp) = s.enter("bulk_upload") {
        return resp;
    }
    s.last_upload_multipart = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));

    let batch = Batch {
        id: s.next_batch_id,
        name: "october".to_string(),
        status: Some("PENDING".to_string()),
    };
    s.next_batch_id += 1;
    let imported = employee(s.next_employee_id, "Imported Payee", 30_000.0, Some(batch.id));
    s.next_employee_id += 1;
    s.batches.push(batch);
    s.employees.push(imported);
    HttpResponse::Ok().json(json!({ "message": "Processed 1 employee" }))
}

async fn list_bank_accounts(state: Shared) -> HttpResponse {
    let mut s = state.lock().unwrap();
    if let Some(resp) = s.enter("list_bank_accounts") {
        return resp;
    }
    HttpResponse::Ok().json(&s.accounts)
}
