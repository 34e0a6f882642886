pub mod company_repo;
