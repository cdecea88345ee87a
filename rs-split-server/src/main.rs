use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use serde::{Deserialize, Serialize};
use rs_split_core::model::partition_generator::PartitionGenerator;
use rs_split_core::model::partition_request::PartitionRequest;

/// Address used when `RS_SPLIT_BIND` is not set.
const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Query parameters shared by `/v1/generate` and `/v1/check`
#[derive(Deserialize)]
struct PartitionParams {
	sum: i64,
	count: usize,
	floor: i64,
	ceiling: i64,
	seed: Option<u64>
}

#[derive(Deserialize)]
struct TraceQuery {
	enabled: Option<bool>
}

/// Body of `/v1/check`
#[derive(Serialize)]
struct CheckResponse {
	feasible: bool,
	min: Option<i128>,
	max: Option<i128>,
	reason: Option<String>
}

struct SharedData {
	generator: PartitionGenerator
}

impl PartitionParams {
	fn request(&self) -> PartitionRequest {
		PartitionRequest::new(self.sum, self.count, self.floor, self.ceiling)
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Returns the generated values as a JSON array, or `422` with the
/// reason when the request has no solution.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<PartitionParams>) -> impl Responder {
	let generator = match data.lock() {
		Ok(shared_data) => shared_data.generator.clone(),
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	let request = query.request();
	let result = match query.seed {
		Some(seed) => generator.generate_seeded(&request, seed),
		None => generator.generate(&request),
	};

	match result {
		Ok(values) => HttpResponse::Ok().json(values),
		Err(e) => {
			log::info!("rejected {:?}: {}", request, e);
			HttpResponse::UnprocessableEntity().body(e.to_string())
		}
	}
}

/// HTTP GET endpoint `/v1/check`
///
/// Reports whether a request is feasible without generating anything.
#[get("/v1/check")]
async fn get_check(query: web::Query<PartitionParams>) -> impl Responder {
	let request = query.request();
	let range = request.reachable_sums();
	let outcome = request.check();
	HttpResponse::Ok().json(CheckResponse {
		feasible: outcome.is_ok(),
		min: range.as_ref().map(|r| *r.start()),
		max: range.as_ref().map(|r| *r.end()),
		reason: outcome.err().map(|e| e.to_string()),
	})
}

/// HTTP PUT endpoint `/v1/trace`
///
/// Turns split tracing on or off for every following request.
#[put("/v1/trace")]
async fn put_trace(data: web::Data<Mutex<SharedData>>, query: web::Query<TraceQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	let enabled = match query.enabled {
		Some(enabled) => enabled,
		None => return HttpResponse::BadRequest().body("Missing 'enabled' parameter"),
	};

	if enabled {
		shared_data.generator.trace_on();
	} else {
		shared_data.generator.trace_off();
	}
	log::info!("tracing {}", if enabled { "enabled" } else { "disabled" });

	HttpResponse::Ok().body(format!("Tracing {}", if enabled { "enabled" } else { "disabled" }))
}

fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_generated)
		.service(get_check)
		.service(put_trace);
}

/// Main entry point for the server.
///
/// Wraps a `PartitionGenerator` in a `Mutex` (only the trace switch
/// mutates it) and starts an Actix-web HTTP server.
///
/// # Notes
/// - Binds to `RS_SPLIT_BIND`, or 127.0.0.1:5000 when unset.
/// - Log level follows `RUST_LOG`; split traces use the `rs_split::trace` target.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let bind = std::env::var("RS_SPLIT_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_owned());
	let shared_data = SharedData {
		generator: PartitionGenerator::new(),
	};
	let shared_generator = web::Data::new(Mutex::new(shared_data));

	log::info!("listening on {bind}");
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET", "PUT"]))
			.app_data(shared_generator.clone())
			.configure(configure)
	})
		.bind(bind)?
		.run()
		.await
}
