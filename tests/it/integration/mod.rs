mod upload_workflow_tests;
