mod removing_an_unknown_file_fails;
