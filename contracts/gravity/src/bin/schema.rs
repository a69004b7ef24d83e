use cosmwasm_schema::write_api;
use cosmwasm_std::Empty;
use gravity_bridge::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        query: QueryMsg,
        migrate: Empty,
        execute: ExecuteMsg,
    }
}
