mod checkout_branch_errors;
