use {crate::libs::mvx::spells::format_denominated, num_bigint::BigUint, std::fmt};

/// One stdout line of the balance report: `Balance <label>: <amount>`.
/// With `decimals` set the amount is shown in whole EGLD.
pub struct BalanceLine<'a> {
    pub label: &'a str,
    pub balance: &'a BigUint,
    pub decimals: Option<u32>,
}

impl fmt::Display for BalanceLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decimals {
            Some(d) => write!(
                f,
                "Balance {}: {} EGLD",
                self.label,
                format_denominated(self.balance, d)
            ),
            None => write!(f, "Balance {}: {}", self.label, self.balance),
        }
    }
}
