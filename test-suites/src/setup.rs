use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

use crate::test_fixture::TestFixture;
use crate::SCALAR_7;

pub const USER_FUNDS: i128 = 100_000 * SCALAR_7;

/// Fixture with two users, each holding `USER_FUNDS` of underlying
pub fn create_fixture_with_data<'a>() -> TestFixture<'a> {
    let mut fixture = TestFixture::create();
    for _ in 0..2 {
        let user = Address::generate(&fixture.env);
        fixture.underlying.mint(&user, &USER_FUNDS);
        fixture.users.push(user);
    }
    fixture
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_fixture_with_data() {
        let fixture = create_fixture_with_data();
        assert_eq!(fixture.users.len(), 2);
        assert_eq!(fixture.token.balance(&fixture.users[0]), USER_FUNDS);
        assert_eq!(fixture.vault.admin(), fixture.admin);
        assert_eq!(fixture.vault.total_underlying(), 0);
    }
}
