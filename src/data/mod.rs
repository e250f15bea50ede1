pub mod annual_cost;
pub mod initial_investment;
pub mod market_growth;
