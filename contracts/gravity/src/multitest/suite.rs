use anyhow::Result as AnyResult;
use cosmwasm_std::{Addr, Api, CanonicalAddr, Empty, HexBinary, StdResult, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use derivative::Derivative;
use gravity_valset::{BridgeValidators, Checkpoint, Valset};
use test_utils::example_validators;

use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::config::Config;

/// Number of test tokens minted to the owner when the token is deployed
pub const INITIAL_BALANCE: u128 = 1_000_000;

fn contract_access_control() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        access_control::contract::execute,
        access_control::contract::instantiate,
        access_control::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

fn contract_gravity() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(crate::execute, crate::instantiate, crate::query)
        .with_migrate(crate::migrate);
    Box::new(contract)
}

/// Which address the bridge is told to use as its access control contract
#[derive(Debug)]
pub enum AccessControlRef {
    /// The access control contract deployed by the suite
    Deployed,
    /// The all zero account address
    Zero,
    Raw(String),
}

#[derive(Derivative)]
#[derivative(Default = "new")]
pub struct SuiteBuilder {
    #[derivative(Default(value = "\"foo\".to_owned()"))]
    gravity_id: String,
    #[derivative(Default(value = "6666"))]
    power_threshold: u64,
    /// Defaults to the first 130 signers
    validators: Option<Vec<String>>,
    /// Defaults to the example power distribution
    powers: Option<Vec<u64>>,
    #[derivative(Default(value = "AccessControlRef::Deployed"))]
    access_control: AccessControlRef,
    /// Tokens sent to the bridge after deployment
    #[derivative(Default(value = "100"))]
    bridge_funds: u128,
}

impl SuiteBuilder {
    pub fn with_gravity_id(mut self, gravity_id: &str) -> Self {
        self.gravity_id = gravity_id.to_owned();
        self
    }

    pub fn with_power_threshold(mut self, power_threshold: u64) -> Self {
        self.power_threshold = power_threshold;
        self
    }

    pub fn with_validators(mut self, validators: Vec<String>) -> Self {
        self.validators = Some(validators);
        self
    }

    pub fn with_powers(mut self, powers: Vec<u64>) -> Self {
        self.powers = Some(powers);
        self
    }

    pub fn with_access_control(mut self, access_control: AccessControlRef) -> Self {
        self.access_control = access_control;
        self
    }

    pub fn with_bridge_funds(mut self, amount: u128) -> Self {
        self.bridge_funds = amount;
        self
    }

    #[track_caller]
    pub fn build(self) -> Suite {
        self.try_build().unwrap()
    }

    /// Deploys everything, returning the first deployment error
    pub fn try_build(self) -> AnyResult<Suite> {
        let mut app = App::default();
        let owner = app.api().addr_make("owner");

        let access_control_code_id = app.store_code(contract_access_control());
        let access_control = app.instantiate_contract(
            access_control_code_id,
            owner.clone(),
            &access_control::msg::InstantiateMsg {},
            &[],
            "access-control",
            None,
        )?;

        let token_code_id = app.store_code(contract_cw20());
        let token = app.instantiate_contract(
            token_code_id,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Bitcoin MAX".to_owned(),
                symbol: "MAX".to_owned(),
                decimals: 18,
                initial_balances: vec![Cw20Coin {
                    address: owner.to_string(),
                    amount: Uint128::new(INITIAL_BALANCE),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "test-token",
            None,
        )?;

        let access_control_arg = match self.access_control {
            AccessControlRef::Deployed => access_control.to_string(),
            AccessControlRef::Zero => app
                .api()
                .addr_humanize(&CanonicalAddr::from(vec![0u8; 32]))?
                .to_string(),
            AccessControlRef::Raw(addr) => addr,
        };

        let (default_validators, default_powers) = example_validators(130);
        let validators = self.validators.unwrap_or(default_validators);
        let powers = self.powers.unwrap_or(default_powers);

        let gravity_code_id = app.store_code(contract_gravity());
        let gravity = app.instantiate_contract(
            gravity_code_id,
            owner.clone(),
            &InstantiateMsg {
                gravity_id: self.gravity_id.clone(),
                power_threshold: self.power_threshold,
                validators: validators.clone(),
                powers: powers.clone(),
                access_control: access_control_arg,
            },
            &[],
            "gravity",
            Some(owner.to_string()),
        )?;

        // computed independently of the contract
        let checkpoint = Valset::genesis(BridgeValidators::from_parts(&validators, &powers)?)
            .checkpoint(&self.gravity_id)?;

        if self.bridge_funds > 0 {
            app.execute_contract(
                owner.clone(),
                token.clone(),
                &Cw20ExecuteMsg::Transfer {
                    recipient: gravity.to_string(),
                    amount: Uint128::new(self.bridge_funds),
                },
                &[],
            )?;
        }

        Ok(Suite {
            app,
            code_id: gravity_code_id,
            owner,
            access_control,
            token,
            gravity,
            checkpoint,
        })
    }
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct Suite {
    #[derivative(Debug = "ignore")]
    pub app: App,
    /// The code id of the gravity contract
    code_id: u64,
    /// Deployer of all the contracts, admin of the access control contract
    pub owner: Addr,
    pub access_control: Addr,
    /// The cw20 test token
    pub token: Addr,
    pub gravity: Addr,
    /// Checkpoint of the deployed validator set, computed off-chain
    pub checkpoint: Checkpoint,
}

impl Suite {
    pub fn user(&self, name: &str) -> Addr {
        self.app.api().addr_make(name)
    }

    /// Shortcut for querying the test token balance of address
    pub fn balance(&self, addr: &Addr) -> StdResult<u128> {
        let res: BalanceResponse = self.app.wrap().query_wasm_smart(
            &self.token,
            &Cw20QueryMsg::Balance {
                address: addr.to_string(),
            },
        )?;
        Ok(res.balance.u128())
    }

    pub fn withdraw_erc20(&mut self, sender: &Addr) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.gravity.clone(),
            &ExecuteMsg::WithdrawErc20 {
                token: self.token.to_string(),
            },
            &[],
        )
    }

    pub fn grant_admin(&mut self, sender: &Addr, addr: &Addr) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.access_control.clone(),
            &access_control::msg::ExecuteMsg::AddAdminRole {
                address: addr.to_string(),
            },
            &[],
        )
    }

    pub fn has_admin_role(&self, addr: &Addr) -> StdResult<bool> {
        self.app.wrap().query_wasm_smart(
            &self.access_control,
            &access_control::msg::QueryMsg::HasAdminRole {
                address: addr.to_string(),
            },
        )
    }

    pub fn get_config(&self) -> Config {
        self.app
            .wrap()
            .query_wasm_smart(&self.gravity, &QueryMsg::Config {})
            .unwrap()
    }

    pub fn query_access_control(&self) -> StdResult<Addr> {
        self.app
            .wrap()
            .query_wasm_smart(&self.gravity, &QueryMsg::AccessControl {})
    }

    pub fn last_valset_checkpoint(&self) -> StdResult<HexBinary> {
        self.app
            .wrap()
            .query_wasm_smart(&self.gravity, &QueryMsg::LastValsetCheckpoint {})
    }

    pub fn migrate(&mut self, sender: &Addr, msg: Empty) -> AnyResult<AppResponse> {
        self.app
            .migrate_contract(sender.clone(), self.gravity.clone(), &msg, self.code_id)
    }
}
