mod reports_dispatch_errors;
