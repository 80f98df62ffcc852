//! Keyword tables for Transact-SQL, one phrase per line.

pub(crate) const TSQL_RESERVED_TOP_LEVEL_KEYWORDS: &str = "ADD
ALTER COLUMN
ALTER TABLE
DECLARE
DELETE FROM
FROM
GROUP BY
HAVING
INSERT INTO
INSERT
ORDER BY
SELECT
SET
UPDATE
VALUES
WHERE
";

pub(crate) const TSQL_RESERVED_TOP_LEVEL_NO_INDENT_KEYWORDS: &str = "EXCEPT
GO
INTERSECT
UNION
UNION ALL
";

pub(crate) const TSQL_RESERVED_NEWLINE_KEYWORDS: &str = "AND
CROSS APPLY
CROSS JOIN
ELSE
FULL JOIN
FULL OUTER JOIN
INNER JOIN
JOIN
LEFT JOIN
LEFT OUTER JOIN
OR
OUTER APPLY
RIGHT JOIN
RIGHT OUTER JOIN
WHEN
";

pub(crate) const TSQL_RESERVED_KEYWORDS: &str = "ALL
ANY
AS
ASC
AUTHORIZATION
BACKUP
BETWEEN
BREAK
BROWSE
BULK
BY
CASCADE
CHECK
CHECKPOINT
CLOSE
CLUSTERED
COALESCE
COLLATE
COLUMN
COMMIT
COMPUTE
CONSTRAINT
CONTAINS
CONTINUE
CONVERT
CREATE
CROSS
CURRENT
CURRENT_DATE
CURRENT_TIME
CURRENT_TIMESTAMP
CURRENT_USER
CURSOR
DATABASE
DBCC
DEALLOCATE
DEFAULT
DENY
DESC
DISK
DISTINCT
DISTRIBUTED
DOUBLE
DROP
DUMP
ERRLVL
ESCAPE
EXEC
EXECUTE
EXISTS
EXIT
EXTERNAL
FETCH
FILE
FILLFACTOR
FOR
FOREIGN KEY
FREETEXT
FULL
FUNCTION
GOTO
GRANT
HOLDLOCK
IDENTITY
IF
IN
INDEX
INTO
IS
KEY
KILL
LEFT
LIKE
LINENO
MERGE
NATIONAL
NOCHECK
NONCLUSTERED
NOT
NULL
NULLIF
OF
OFF
OFFSETS
ON
OPEN
OPTION
ORDER
OUTER
OVER
PARTITION BY
PERCENT
PIVOT
PLAN
PRECISION
PRIMARY KEY
PRINT
PROC
PROCEDURE
PUBLIC
RAISERROR
READ
READTEXT
RECONFIGURE
REFERENCES
REPLICATION
RESTORE
RESTRICT
RETURN
REVERT
REVOKE
RIGHT
ROLLBACK
ROWCOUNT
ROWGUIDCOL
RULE
SAVE
SCHEMA
SECURITYAUDIT
SEMANTICKEYPHRASETABLE
SESSION_USER
SETUSER
SHUTDOWN
SOME
STATISTICS
SYSTEM_USER
TABLE
TABLESAMPLE
TEXTSIZE
THEN
TO
TOP
TRAN
TRANSACTION
TRIGGER
TRUNCATE
TSEQUAL
UNIQUE
UNPIVOT
UPDATETEXT
USE
USER
VARYING
VIEW
WAITFOR
WHILE
WITH
WITHIN GROUP
WRITETEXT
";
