//! Fungible token contract bindings.

use alloy_sol_types::sol;

sol! {
    /// Fixed-supply fungible token with ERC20 accounting.
    #[sol(rpc)]
    contract Token {
        /// Emitted when tokens move between accounts
        event Transfer(
            address indexed from,
            address indexed to,
            uint256 value
        );

        /// Emitted when an owner sets a spender's allowance
        event Approval(
            address indexed owner,
            address indexed spender,
            uint256 value
        );

        /// Credits `_totalSupply * 10 ** decimals` to the deployer
        constructor(string memory _name, string memory _symbol, uint256 _totalSupply);

        /// Get token name
        function name() external view returns (string memory);

        /// Get token symbol
        function symbol() external view returns (string memory);

        /// Get token decimals
        function decimals() external view returns (uint256);

        /// Get total supply
        function totalSupply() external view returns (uint256);

        /// Get token balance of an account
        function balanceOf(address account) external view returns (uint256);

        /// Get allowance granted by owner to spender
        function allowance(address owner, address spender) external view returns (uint256);

        /// Transfer tokens to recipient
        function transfer(address _to, uint256 _value) external returns (bool success);

        /// Approve spender to spend tokens
        function approve(address _spender, uint256 _value) external returns (bool success);

        /// Transfer tokens from owner to recipient (requires allowance)
        function transferFrom(address _from, address _to, uint256 _value) external returns (bool success);
    }
}
