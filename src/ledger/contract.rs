use ethers::prelude::*;

abigen!(
    TradeExecutor,
    r#"[
        function buy() external
        function sell() external
        event TradeExecuted(string action)
    ]"#
);
