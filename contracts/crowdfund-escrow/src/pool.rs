use crate::types::Error;
use soroban_sdk::{token, Address, Env};

// Both helpers are called only after the campaign aggregate has been written
// back to storage. A failed token call is reported as `TransferFailed`, and
// returning that error makes the host discard the invocation's writes, so no
// movement is ever recorded that did not happen on the token side.

/// Move `amount` from a contributor into the escrow pool.
pub fn pay_in(env: &Env, token: &Address, from: &Address, amount: &i128) -> Result<(), Error> {
    let client = token::Client::new(env, token);
    if client
        .try_transfer(from, &env.current_contract_address(), amount)
        .is_err()
    {
        return Err(Error::TransferFailed);
    }
    Ok(())
}

/// Move `amount` from the escrow pool out to a contributor or the creator.
pub fn pay_out(env: &Env, token: &Address, to: &Address, amount: &i128) -> Result<(), Error> {
    let client = token::Client::new(env, token);
    if client
        .try_transfer(&env.current_contract_address(), to, amount)
        .is_err()
    {
        return Err(Error::TransferFailed);
    }
    Ok(())
}
