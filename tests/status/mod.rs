mod status_of_a_fresh_repository;
