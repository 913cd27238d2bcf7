pub mod repositories;
pub mod supabase_rest;
