// End-to-end integration tests for the HotNews backend API
//
// One shared testcontainers PostgreSQL instance serves the whole suite. A
// database pool hands every test its own migrated database (test_db_<uuid>)
// through test-context lifecycle hooks, and truncates it before reuse, so
// tests can run in parallel.

mod test_news;
