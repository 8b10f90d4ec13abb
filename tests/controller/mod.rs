mod routes;
mod user;
